//! Endpoint Catalog
//!
//! Every known ITS operation. Paths are copied verbatim from the upstream
//! API, including its inconsistent `Query`/`query` casing: the server is
//! case sensitive on some routes.

use crate::core::HttpMethod;
use crate::endpoints::descriptor::{Category, EndpointDescriptor};
use crate::validation::conditional::{
    EVENT_FILTER, EVENT_IDENTIFIER, LONGITUDINAL_GROUP_IDENTIFIER, ORDERED_WINDOW, ORDER_WINDOW,
    PARENT_INSTITUTION_FOR_INSTITUTION_CLIENTS, SESSION_CODE_FOR_URL_TYPE_ONE, SESSION_OR_WINDOW,
    UTC_WINDOW,
};
use crate::validation::BodyRule;

use Category::*;

const EXAMINEE_IMPORT: BodyRule = BodyRule::NonEmptyArray {
    element: "examinee",
    fields: &["examineeId"],
};

const EVENT_CREATION: BodyRule = BodyRule::RequiredFields {
    fields: &["eventName", "eventDescription"],
    context: "event creation",
};

const GROUP_EXAMINEES: BodyRule = BodyRule::NonEmptyArray {
    element: "examinee",
    fields: &[],
};

// Event classes

pub static QUERY_EVENT_CLASSES: EndpointDescriptor =
    EndpointDescriptor::get("queryEventClasses", "/event-class/Query", EventClasses)
        .summary("Query testing event classes and configurations")
        .institution_required()
        .requires(&["event-id"])
        .accepts(&["event-class-id", "program-class-code"]);

pub static CREATE_EVENT_CLASS: EndpointDescriptor =
    EndpointDescriptor::post("createEventClass", "/event-class/Create", EventClasses)
        .summary("Create an event class")
        .institution_required()
        .json_body();

pub static UPDATE_EVENT_CLASS: EndpointDescriptor =
    EndpointDescriptor::patch("updateEventClass", "/event-class/Update", EventClasses)
        .summary("Update an event class")
        .institution_required()
        .json_body();

pub static DELETE_EVENT_CLASS: EndpointDescriptor =
    EndpointDescriptor::delete("deleteEventClass", "/event-class/Delete", EventClasses)
        .summary("Delete an event class")
        .without_institution()
        .requires(&["event-class-id"]);

pub static CREATE_EVENT_CLASS_EXAMINEES: EndpointDescriptor = EndpointDescriptor::post(
    "createEventClassExaminees",
    "/event-class/examinees/create",
    EventClasses,
)
.summary("Add examinees to an event class")
.institution_required()
.requires(&["event-class-id"])
.accepts(&["ExamineeIds", "ProgramExamineeSystemIds", "ProgramExamineePublicIds"])
.optional_json_body();

pub static QUERY_EVENT_CLASS_EXAMINEES: EndpointDescriptor = EndpointDescriptor::get(
    "queryEventClassExaminees",
    "/event-class/examinees/query",
    EventClasses,
)
.summary("Query examinees in event classes")
.accepts(&[
    "event-class-id",
    "examinee-id",
    "program-examinee-system-id",
    "program-examinee-public-id",
]);

pub static DELETE_EVENT_CLASS_EXAMINEES: EndpointDescriptor = EndpointDescriptor::delete(
    "deleteEventClassExaminees",
    "/event-class/examinees/delete",
    EventClasses,
)
.summary("Remove examinees from an event class")
.without_institution()
.accepts(&["event-class-examinee-id", "event-class-id"]);

// Events

pub static QUERY_EVENT_AUTHORIZATIONS: EndpointDescriptor = EndpointDescriptor::get(
    "queryEventAuthorizations",
    "/event/authorizations/Query",
    Events,
)
.summary("Query event authorizations and permissions")
.institution_required()
.accepts(&["limit", "before-id", "after-id"])
.rules(&[EVENT_IDENTIFIER]);

pub static IMPORT_EVENT_EXAMINEES: EndpointDescriptor =
    EndpointDescriptor::post("importEventExaminees", "/event/examinee/import", Events)
        .summary("Import examinees into an event")
        .requires(&["event-id"])
        .json_body_with(EXAMINEE_IMPORT);

pub static UPDATE_EVENT_EXAMINEES: EndpointDescriptor =
    EndpointDescriptor::patch("updateEventExaminees", "/event/examinee/import", Events)
        .summary("Update imported examinees of an event")
        .requires(&["event-id"])
        .json_body_with(EXAMINEE_IMPORT);

pub static QUERY_EVENTS: EndpointDescriptor =
    EndpointDescriptor::get("queryEvents", "/event/query", Events)
        .summary("Query testing events and schedules")
        .accepts(&["active-only", "limit", "before-id", "after-id"])
        .rules(&[EVENT_FILTER]);

pub static CLOSE_EVENT: EndpointDescriptor =
    EndpointDescriptor::delete("closeEvent", "/event/close", Events)
        .summary("Close an event")
        .rules(&[EVENT_IDENTIFIER]);

pub static CREATE_EVENT: EndpointDescriptor =
    EndpointDescriptor::post("createEvent", "/event/create", Events)
        .summary("Create a testing event")
        .json_body_with(EVENT_CREATION);

pub static UPDATE_EVENT: EndpointDescriptor =
    EndpointDescriptor::put("updateEvent", "/event/update", Events)
        .summary("Update a testing event")
        .json_body();

// Examinees

pub static QUERY_EXAMINEE_EVENTS: EndpointDescriptor =
    EndpointDescriptor::get("queryExamineeEvents", "/examinee/events/query", Examinees)
        .summary("Query events for specific examinees")
        .accepts(&[
            "examinee-id",
            "program-examinee-system-id",
            "program-examinee-public-id",
            "IDType",
        ]);

pub static QUERY_EXAMINEE_AUDIT: EndpointDescriptor =
    EndpointDescriptor::get("queryExamineeAudit", "/examinee/audit/query", Examinees)
        .summary("Query examinee audit trail and activity history")
        .accepts(&[
            "examinee-id",
            "program-examinee-system-id",
            "program-examinee-public-id",
            "limit",
            "before-id",
            "after-id",
        ]);

pub static QUERY_EXAMINEES: EndpointDescriptor =
    EndpointDescriptor::get("queryExaminees", "/examinee/query", Examinees)
        .summary("Query examinees and their information")
        .accepts(&[
            "examinee-id",
            "program-examinee-system-id",
            "program-examinee-public-id",
            "limit",
            "before-id",
            "after-id",
        ]);

pub static QUERY_EXAMINEE_RECORDS: EndpointDescriptor =
    EndpointDescriptor::get("queryExamineeRecords", "/examinee/record/query", Examinees)
        .summary("Query detailed examinee records and history")
        .accepts(&[
            "examinee-id",
            "program-examinee-system-id",
            "program-examinee-public-id",
            "limit",
            "before-id",
            "after-id",
        ]);

// Forms

pub static IMPORT_FORM_DEFINITION: EndpointDescriptor =
    EndpointDescriptor::post("importFormDefinition", "/form/definition/Import", Forms)
        .summary("Import a form definition")
        .json_body();

pub static QUERY_FORM_DEFINITIONS: EndpointDescriptor =
    EndpointDescriptor::get("queryFormDefinitions", "/form/definition/Query", Forms)
        .summary("Query form definitions and structures")
        .accepts(&["form-id"]);

pub static QUERY_FORMS: EndpointDescriptor =
    EndpointDescriptor::get("queryForms", "/Form/Query", Forms)
        .summary("Query forms and their content")
        .accepts(&[
            "form-id",
            "last-modified-utc",
            "include-flag",
            "limit",
            "before-id",
            "after-id",
        ]);

pub static CREATE_FORM: EndpointDescriptor =
    EndpointDescriptor::post("createForm", "/Form/Create", Forms)
        .summary("Create a form")
        .json_body();

pub static UPDATE_FORM: EndpointDescriptor =
    EndpointDescriptor::patch("updateForm", "/Form/Update", Forms)
        .summary("Update a form")
        .json_body();

pub static DELETE_FORM: EndpointDescriptor =
    EndpointDescriptor::delete("deleteForm", "/Form/Delete", Forms)
        .summary("Delete a form")
        .requires(&["form-id"]);

pub static QUERY_FORM_REPORTS: EndpointDescriptor =
    EndpointDescriptor::get("queryFormReports", "/form/reports/Query", Forms)
        .summary("Query form reports and analytics")
        .without_institution()
        .requires(&["test-id", "form-id"]);

pub static QUERY_FORM_RES_FILES: EndpointDescriptor =
    EndpointDescriptor::get("queryFormResFiles", "/form/res-files/Query", Forms)
        .summary("Query form resource files")
        .without_institution()
        .requires(&["form-id"]);

// Institutions

pub static QUERY_CHANNEL_INSTITUTIONS: EndpointDescriptor = EndpointDescriptor::get(
    "queryChannelInstitutions",
    "/channel/institutions/query",
    Institutions,
)
.summary("Find schools and institutions by delivery channel")
.accepts(&["limit", "before-id", "after-id"]);

pub static IMPORT_CHANNEL_INSTITUTIONS: EndpointDescriptor = EndpointDescriptor::post(
    "importChannelInstitutions",
    "/channel/institutions/import",
    Institutions,
)
.summary("Import channel institutions")
.without_institution()
.rules(&[PARENT_INSTITUTION_FOR_INSTITUTION_CLIENTS])
.json_body();

pub static UPDATE_CHANNEL_INSTITUTIONS: EndpointDescriptor = EndpointDescriptor::patch(
    "updateChannelInstitutions",
    "/channel/institutions/import",
    Institutions,
)
.summary("Update imported channel institutions")
.without_institution()
.rules(&[PARENT_INSTITUTION_FOR_INSTITUTION_CLIENTS])
.json_body();

// Inventory

pub static QUERY_INVENTORY: EndpointDescriptor =
    EndpointDescriptor::get("queryInventory", "/inventory/query", Inventory)
        .summary("Query test inventory and item banks")
        .institution_required()
        .accepts(&["order-id", "program-order-id", "package-code", "include-flag"])
        .rules(&[ORDER_WINDOW]);

// Item workshop: no program context.

pub static QUERY_TEST_EXPORTS: EndpointDescriptor =
    EndpointDescriptor::get("queryTestExports", "/iw-tool/export/tests/query", ItemWorkshop)
        .summary("Query test export operations")
        .program_exempt()
        .without_institution()
        .requires(&["bank-id", "form-id"]);

pub static IMPORT_ITEM_WORKSHOP: EndpointDescriptor =
    EndpointDescriptor::post("importItemWorkshop", "/iw-tool/import/import", ItemWorkshop)
        .summary("Import an item workshop package")
        .program_exempt()
        .without_institution()
        .requires(&["bank-id", "language", "folder-id"])
        .multipart_body();

pub static IMPORT_ITEM_WORKSHOP_ASYNC: EndpointDescriptor = EndpointDescriptor::post(
    "importItemWorkshopAsync",
    "/iw-tool/import/import-async",
    ItemWorkshop,
)
.summary("Import an item workshop package asynchronously")
.program_exempt()
.without_institution()
.requires(&["bank-id", "language", "folder-id"])
.accepts(&["callback-url"])
.multipart_body();

pub static QUERY_ITEM_WORKSHOP_IMPORT: EndpointDescriptor =
    EndpointDescriptor::get("queryItemWorkshopImport", "/iw-tool/import/query", ItemWorkshop)
        .summary("Query item workshop imports")
        .program_exempt()
        .without_institution()
        .requires(&["bank-id", "import-id"]);

// Longitudinal groups

pub static QUERY_LONGITUDINAL_GROUP_EXAMINEES: EndpointDescriptor = EndpointDescriptor::get(
    "queryLongitudinalGroupExaminees",
    "/longitudinal-group/examinees/query",
    LongitudinalGroups,
)
.summary("Query examinees in longitudinal groups")
.without_institution()
.accepts(&[
    "examinee-id",
    "program-examinee-system-id",
    "program-examinee-public-id",
    "limit",
    "before-id",
    "after-id",
])
.rules(&[LONGITUDINAL_GROUP_IDENTIFIER]);

pub static CREATE_LONGITUDINAL_GROUP_EXAMINEES: EndpointDescriptor = EndpointDescriptor::post(
    "createLongitudinalGroupExaminees",
    "/longitudinal-group/examinees/create",
    LongitudinalGroups,
)
.summary("Add examinees to longitudinal groups")
.without_institution()
.json_body_with(GROUP_EXAMINEES);

pub static UPDATE_LONGITUDINAL_GROUP_EXAMINEES: EndpointDescriptor = EndpointDescriptor::put(
    "updateLongitudinalGroupExaminees",
    "/longitudinal-group/examinees/update",
    LongitudinalGroups,
)
.summary("Update examinees in longitudinal groups")
.without_institution()
.json_body();

pub static DELETE_LONGITUDINAL_GROUP_EXAMINEES: EndpointDescriptor = EndpointDescriptor::delete(
    "deleteLongitudinalGroupExaminees",
    "/longitudinal-group/examinees/delete",
    LongitudinalGroups,
)
.summary("Remove examinees from a longitudinal group")
.without_institution()
.accepts(&[
    "examinee-id",
    "program-examinee-system-id",
    "program-examinee-public-id",
    "permanent-delete",
])
.rules(&[LONGITUDINAL_GROUP_IDENTIFIER]);

pub static QUERY_LONGITUDINAL_SEGMENT_DETAILS: EndpointDescriptor = EndpointDescriptor::get(
    "queryLongitudinalSegmentDetails",
    "/examinee/longitudinal-segment-detail/query",
    LongitudinalGroups,
)
.summary("Query detailed longitudinal data segments")
.without_institution()
.accepts(&[
    "examinee-id",
    "program-examinee-system-id",
    "program-examinee-public-id",
    "include-flag",
    "result-id",
])
.rules(&[LONGITUDINAL_GROUP_IDENTIFIER]);

pub static QUERY_LONGITUDINAL_SEGMENTS: EndpointDescriptor = EndpointDescriptor::get(
    "queryLongitudinalSegments",
    "/examinee/longitudinal-segments/query",
    LongitudinalGroups,
)
.summary("Query longitudinal tracking segments")
.without_institution()
.accepts(&[
    "cycle-num",
    "run-num",
    "segment-num",
    "examinee-id",
    "program-examinee-system-id",
    "program-examinee-public-id",
])
.rules(&[LONGITUDINAL_GROUP_IDENTIFIER, UTC_WINDOW]);

// Messages

pub static QUERY_MESSAGE_HISTORY: EndpointDescriptor =
    EndpointDescriptor::get("queryMessageHistory", "/message-history/query", Messages)
        .summary("Query message history and communication logs")
        .program_optional()
        .without_institution()
        .accepts(&[
            "examinee-id",
            "program-examinee-system-id",
            "program-examinee-public-id",
            "limit",
            "before-id",
            "after-id",
        ])
        .rules(&[UTC_WINDOW]);

// Orders

pub static QUERY_ORDERS: EndpointDescriptor =
    EndpointDescriptor::get("queryOrders", "/order/Query", Orders)
        .summary("Query orders and transactions")
        .accepts(&["order-id", "order-code", "package-code"])
        .rules(&[ORDERED_WINDOW]);

pub static CREATE_ORDER: EndpointDescriptor =
    EndpointDescriptor::post("createOrder", "/order/Create", Orders)
        .summary("Create an order")
        .json_body();

pub static DELETE_ORDER: EndpointDescriptor =
    EndpointDescriptor::delete("deleteOrder", "/order/Delete", Orders)
        .summary("Delete an order")
        .optional_json_body();

// Packages

pub static QUERY_PACKAGE_FORMS: EndpointDescriptor =
    EndpointDescriptor::get("queryPackageForms", "/package/forms/Query", Packages)
        .summary("Query form packages and bundles")
        .institution_required()
        .requires(&["package-code"])
        .accepts(&[
            "accessible-only",
            "non-secure-only",
            "practice-only",
            "non-practice-only",
        ]);

// Registrations

pub static IMPORT_REGISTRATIONS: EndpointDescriptor =
    EndpointDescriptor::post("importRegistrations", "/registration/import", Registrations)
        .summary("Import registrations")
        .json_body();

pub static REPLACE_REGISTRATIONS: EndpointDescriptor =
    EndpointDescriptor::put("replaceRegistrations", "/registration/import", Registrations)
        .summary("Re-import registrations")
        .json_body();

pub static UPDATE_REGISTRATION: EndpointDescriptor =
    EndpointDescriptor::patch("updateRegistration", "/registration/update", Registrations)
        .summary("Update a registration")
        .accepts(&[
            "examinee-id",
            "program-examinee-public-id",
            "program-examinee-system-id",
            "program-examinee-institution-id",
            "program-registration-id",
            "registration-id",
        ])
        .json_body();

pub static QUERY_REGISTRATIONS: EndpointDescriptor =
    EndpointDescriptor::get("queryRegistrations", "/registration/query", Registrations)
        .summary("Query registrations for tests and events")
        .accepts(&[
            "registration-id",
            "program-registration-id",
            "examinee-id",
            "program-examinee-public-id",
            "program-examinee-system-id",
            "program-examinee-institution-id",
            "test-id",
            "started",
            "completed",
            "exclude-flag",
            "limit",
            "before-id",
            "after-id",
        ])
        .rules(&[UTC_WINDOW]);

pub static DELETE_REGISTRATION: EndpointDescriptor =
    EndpointDescriptor::delete("deleteRegistration", "/registration/delete", Registrations)
        .summary("Delete a registration")
        .requires(&["Reason"])
        .accepts(&["registration-id", "program-registration-id"]);

// Remote proctoring

pub static QUERY_REMOTE_PRACTICE_CHECKS: EndpointDescriptor = EndpointDescriptor::get(
    "queryRemotePracticeChecks",
    "/remote/practice-checks/Query",
    Remote,
)
.summary("Query remote practice checks")
.accepts(&[
    "ip-address",
    "program-examinee-public-id",
    "program-registration-id",
    "limit",
    "before-id",
    "after-id",
])
.rules(&[UTC_WINDOW]);

pub static QUERY_REMOTE_SYSTEM_CHECKS: EndpointDescriptor = EndpointDescriptor::get(
    "queryRemoteSystemChecks",
    "/remote/system-checks/Query",
    Remote,
)
.summary("Query remote system checks")
.without_institution()
.accepts(&["ip-address", "limit", "before-id", "after-id"])
.rules(&[UTC_WINDOW]);

pub static CREATE_REMOTE_SESSION: EndpointDescriptor =
    EndpointDescriptor::post("createRemoteSession", "/remote/sessions/create", Remote)
        .summary("Create a remote testing session")
        .json_body();

pub static UPDATE_REMOTE_SESSION: EndpointDescriptor =
    EndpointDescriptor::put("updateRemoteSession", "/remote/sessions/update", Remote)
        .summary("Update a remote testing session")
        .json_body();

pub static QUERY_REMOTE_SESSIONS: EndpointDescriptor =
    EndpointDescriptor::get("queryRemoteSessions", "/remote/sessions/query", Remote)
        .summary("Query remote testing sessions")
        .without_institution()
        .rules(&[SESSION_OR_WINDOW]);

pub static DELETE_REMOTE_SESSION: EndpointDescriptor =
    EndpointDescriptor::delete("deleteRemoteSession", "/remote/sessions/delete", Remote)
        .summary("Delete a remote testing session")
        .without_institution()
        .requires(&["session-code"]);

pub static QUERY_REMOTE_ADMIN_URLS: EndpointDescriptor =
    EndpointDescriptor::get("queryRemoteAdminUrls", "/remote/admin-urls/Query", Remote)
        .summary("Query remote administration URLs")
        .accepts(&["url-type"])
        .rules(&[SESSION_OR_WINDOW, SESSION_CODE_FOR_URL_TYPE_ONE]);

pub static QUERY_REMOTE_EXAMINEE_DATA: EndpointDescriptor = EndpointDescriptor::get(
    "queryRemoteExamineeData",
    "/remote/examinee-data/Query",
    Remote,
)
.summary("Query remote examinee data")
.accepts(&[
    "session-code",
    "examinee-id",
    "program-examinee-system-id",
    "program-examinee-public-id",
]);

pub static QUERY_REMOTE_SESSION_DATA: EndpointDescriptor = EndpointDescriptor::get(
    "queryRemoteSessionData",
    "/remote/session-data/Query",
    Remote,
)
.summary("Query remote session data")
.accepts(&["session-code"])
.rules(&[UTC_WINDOW]);

// Results

pub static QUERY_RESULT_IDENTIFIERS: EndpointDescriptor =
    EndpointDescriptor::get("queryResultIdentifiers", "/result-identifier/Query", Results)
        .summary("Query result identifiers and references")
        .accepts(&[
            "examinee-id",
            "program-examinee-system-id",
            "program-examinee-public-id",
            "program-registration-id",
            "program-center-id",
            "cohort-id",
            "event-id",
            "test-id",
            "form-id",
            "longitudinal-group-id",
            "completed-only",
            "equated-only",
            "include-demo",
            "limit",
            "before-id",
            "after-id",
        ])
        .rules(&[UTC_WINDOW]);

pub static QUERY_RESULTS: EndpointDescriptor =
    EndpointDescriptor::get("queryResults", "/result/query", Results)
        .summary("Query test results and scores")
        .accepts(&[
            "result-id",
            "examinee-id",
            "test-id",
            "limit",
            "before-id",
            "after-id",
        ]);

// Scheduling

pub static QUERY_SABBATICALS: EndpointDescriptor =
    EndpointDescriptor::get("querySabbaticals", "/sabbatical/Query", Scheduling)
        .summary("Query sabbatical periods")
        .without_institution()
        .accepts(&[
            "examinee-id",
            "program-examinee-system-id",
            "program-examinee-public-id",
            "examinee-sabbatical-id",
        ])
        .rules(&[UTC_WINDOW]);

// Secure browser

pub static QUERY_SECURE_BROWSER_ERRORS: EndpointDescriptor = EndpointDescriptor::get(
    "querySecureBrowserErrors",
    "/secure-browser/errors/query",
    Security,
)
.summary("Query secure browser errors")
.requires(&["environment-id"])
.accepts(&["external-registration-id", "limit", "before-id", "end-id"])
.rules(&[UTC_WINDOW]);

pub static VALIDATE_SECURE_BROWSER_TOKEN: EndpointDescriptor = EndpointDescriptor::post(
    "validateSecureBrowserToken",
    "/secure-browser/tokens/validate",
    Security,
)
.summary("Validate a secure browser token")
.without_institution()
.json_body();

// Sessions

pub static QUERY_SESSIONS: EndpointDescriptor =
    EndpointDescriptor::get("querySessions", "/session/query", Sessions)
        .summary("Query testing sessions")
        .accepts(&["session-code"])
        .rules(&[UTC_WINDOW]);

pub static CREATE_SESSION: EndpointDescriptor =
    EndpointDescriptor::post("createSession", "/session/create", Sessions)
        .summary("Create a testing session")
        .json_body();

pub static UPDATE_SESSION: EndpointDescriptor =
    EndpointDescriptor::patch("updateSession", "/session/update", Sessions)
        .summary("Update a testing session")
        .json_body();

pub static DELETE_SESSION: EndpointDescriptor =
    EndpointDescriptor::delete("deleteSession", "/session/delete", Sessions)
        .summary("Delete a testing session")
        .without_institution()
        .requires(&["session-code"]);

// System lookups: no program context.

pub static QUERY_SIGNALR_DOMAINS: EndpointDescriptor =
    EndpointDescriptor::get("querySignalRDomains", "/signalr-domain/query", System)
        .summary("Query SignalR domains and endpoints")
        .program_exempt()
        .without_institution();

pub static QUERY_TIMEZONES: EndpointDescriptor =
    EndpointDescriptor::get("queryTimezones", "/Timezone/Query", System)
        .summary("Query supported timezones")
        .program_exempt()
        .without_institution();

// Testing

pub static START_TEST_LOGIN: EndpointDescriptor =
    EndpointDescriptor::post("startTestLogin", "/start-test/Login", Testing)
        .summary("Log an examinee into a test")
        .program_optional()
        .optional_json_body();

pub static START_TEST: EndpointDescriptor =
    EndpointDescriptor::post("startTest", "/start-test/Start", Testing)
        .summary("Start a test")
        .program_optional()
        .optional_json_body();

pub static QUERY_TEST_FORMS: EndpointDescriptor =
    EndpointDescriptor::get("queryTestForms", "/test/forms/Query", Testing)
        .summary("Query test forms and configurations")
        .accepts(&["test-name", "test-id"])
        .rules(&[UTC_WINDOW]);

pub static QUERY_TEST_PRETEST_REFERENCES: EndpointDescriptor = EndpointDescriptor::get(
    "queryTestPretestReferences",
    "/test/pretest-references/Query",
    Testing,
)
.summary("Query pretest references")
.without_institution()
.accepts(&["test-id"]);

pub static IMPORT_TEST_PRETEST_REFERENCES: EndpointDescriptor = EndpointDescriptor::post(
    "importTestPretestReferences",
    "/test/pretest-references/Import",
    Testing,
)
.summary("Import pretest references")
.without_institution()
.requires(&["test-id"])
.json_body();

pub static QUERY_TESTS: EndpointDescriptor =
    EndpointDescriptor::get("queryTests", "/Test/Query", Testing)
        .summary("Query tests and assessments")
        .accepts(&["test-id", "limit", "before-id", "after-id"]);

// Users

pub static QUERY_USER_ACCESS: EndpointDescriptor =
    EndpointDescriptor::get("queryUserAccess", "/user/access/query", Users)
        .summary("Query user access and permissions")
        .program_optional()
        .accepts(&[
            "vendor-id",
            "sponsor-id",
            "user-id",
            "program-user-system-id",
            "program-user-public-id",
            "included-user-types",
            "included-user-statuses",
        ]);

pub static DELETE_USER_ACCESS: EndpointDescriptor =
    EndpointDescriptor::delete("deleteUserAccess", "/user/access/delete", Users)
        .summary("Revoke user access")
        .program_optional()
        .accepts(&[
            "vendor-id",
            "sponsor-id",
            "user-id",
            "program-user-system-id",
            "program-user-public-id",
        ]);

pub static QUERY_USERS: EndpointDescriptor =
    EndpointDescriptor::get("queryUsers", "/User/query", Users)
        .summary("Query users")
        .program_exempt()
        .without_institution()
        .accepts(&[
            "vendor-id",
            "sponsor-id",
            "user-id",
            "program-user-system-id",
            "program-user-public-id",
            "included-user-types",
            "included-user-statuses",
        ]);

pub static DELETE_USER: EndpointDescriptor =
    EndpointDescriptor::delete("deleteUser", "/User/delete", Users)
        .summary("Delete a user")
        .program_exempt()
        .requires(&["vendor-id"])
        .accepts(&["user-id", "program-user-system-id", "program-user-public-id"]);

/// Every descriptor, grouped by resource.
pub static ENDPOINTS: &[&EndpointDescriptor] = &[
    &QUERY_EVENT_CLASSES,
    &CREATE_EVENT_CLASS,
    &UPDATE_EVENT_CLASS,
    &DELETE_EVENT_CLASS,
    &CREATE_EVENT_CLASS_EXAMINEES,
    &QUERY_EVENT_CLASS_EXAMINEES,
    &DELETE_EVENT_CLASS_EXAMINEES,
    &QUERY_EVENT_AUTHORIZATIONS,
    &IMPORT_EVENT_EXAMINEES,
    &UPDATE_EVENT_EXAMINEES,
    &QUERY_EVENTS,
    &CLOSE_EVENT,
    &CREATE_EVENT,
    &UPDATE_EVENT,
    &QUERY_EXAMINEE_EVENTS,
    &QUERY_EXAMINEE_AUDIT,
    &QUERY_EXAMINEES,
    &QUERY_EXAMINEE_RECORDS,
    &IMPORT_FORM_DEFINITION,
    &QUERY_FORM_DEFINITIONS,
    &QUERY_FORMS,
    &CREATE_FORM,
    &UPDATE_FORM,
    &DELETE_FORM,
    &QUERY_FORM_REPORTS,
    &QUERY_FORM_RES_FILES,
    &QUERY_CHANNEL_INSTITUTIONS,
    &IMPORT_CHANNEL_INSTITUTIONS,
    &UPDATE_CHANNEL_INSTITUTIONS,
    &QUERY_INVENTORY,
    &QUERY_TEST_EXPORTS,
    &IMPORT_ITEM_WORKSHOP,
    &IMPORT_ITEM_WORKSHOP_ASYNC,
    &QUERY_ITEM_WORKSHOP_IMPORT,
    &QUERY_LONGITUDINAL_GROUP_EXAMINEES,
    &CREATE_LONGITUDINAL_GROUP_EXAMINEES,
    &UPDATE_LONGITUDINAL_GROUP_EXAMINEES,
    &DELETE_LONGITUDINAL_GROUP_EXAMINEES,
    &QUERY_LONGITUDINAL_SEGMENT_DETAILS,
    &QUERY_LONGITUDINAL_SEGMENTS,
    &QUERY_MESSAGE_HISTORY,
    &QUERY_ORDERS,
    &CREATE_ORDER,
    &DELETE_ORDER,
    &QUERY_PACKAGE_FORMS,
    &IMPORT_REGISTRATIONS,
    &REPLACE_REGISTRATIONS,
    &UPDATE_REGISTRATION,
    &QUERY_REGISTRATIONS,
    &DELETE_REGISTRATION,
    &QUERY_REMOTE_PRACTICE_CHECKS,
    &QUERY_REMOTE_SYSTEM_CHECKS,
    &CREATE_REMOTE_SESSION,
    &UPDATE_REMOTE_SESSION,
    &QUERY_REMOTE_SESSIONS,
    &DELETE_REMOTE_SESSION,
    &QUERY_REMOTE_ADMIN_URLS,
    &QUERY_REMOTE_EXAMINEE_DATA,
    &QUERY_REMOTE_SESSION_DATA,
    &QUERY_RESULT_IDENTIFIERS,
    &QUERY_RESULTS,
    &QUERY_SABBATICALS,
    &QUERY_SECURE_BROWSER_ERRORS,
    &VALIDATE_SECURE_BROWSER_TOKEN,
    &QUERY_SESSIONS,
    &CREATE_SESSION,
    &UPDATE_SESSION,
    &DELETE_SESSION,
    &QUERY_SIGNALR_DOMAINS,
    &QUERY_TIMEZONES,
    &START_TEST_LOGIN,
    &START_TEST,
    &QUERY_TEST_FORMS,
    &QUERY_TEST_PRETEST_REFERENCES,
    &IMPORT_TEST_PRETEST_REFERENCES,
    &QUERY_TESTS,
    &QUERY_USER_ACCESS,
    &DELETE_USER_ACCESS,
    &QUERY_USERS,
    &DELETE_USER,
];

/// All known operations.
pub fn all() -> &'static [&'static EndpointDescriptor] {
    ENDPOINTS
}

/// Look up an operation by id. Case sensitive.
pub fn find(operation_id: &str) -> Option<&'static EndpointDescriptor> {
    ENDPOINTS
        .iter()
        .copied()
        .find(|descriptor| descriptor.operation_id == operation_id)
}

/// Look up an operation by method and exact path.
pub fn find_route(method: HttpMethod, path: &str) -> Option<&'static EndpointDescriptor> {
    ENDPOINTS
        .iter()
        .copied()
        .find(|descriptor| descriptor.method == method && descriptor.path == path)
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static EndpointDescriptor> {
    ENDPOINTS
        .iter()
        .copied()
        .filter(move |descriptor| descriptor.category == category)
}

/// Rank operations against a free-text query.
///
/// Whole-query hits on the id weigh 10, on the summary 5; each query word
/// found in the path, category or summary adds 2.
pub fn search(query: &str) -> Vec<&'static EndpointDescriptor> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let words: Vec<&str> = query.split_whitespace().collect();

    let mut scored: Vec<(u32, &'static EndpointDescriptor)> = ENDPOINTS
        .iter()
        .copied()
        .filter_map(|descriptor| {
            let id = descriptor.operation_id.to_lowercase();
            let summary = descriptor.summary.to_lowercase();
            let path = descriptor.path.to_lowercase();

            let mut score = 0;
            if id.contains(&query) {
                score += 10;
            }
            if summary.contains(&query) {
                score += 5;
            }
            for word in &words {
                if path.contains(word)
                    || descriptor.category.as_str().contains(word)
                    || summary.contains(word)
                {
                    score += 2;
                }
            }
            (score > 0).then_some((score, descriptor))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, descriptor)| descriptor).collect()
}
