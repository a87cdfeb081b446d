/// UI labels of the resource levelling and alignment tools, in screen order.
/// Repeated labels are kept: each occurrence is translated and exported.
pub const UI_LABELS: &[&str] = &[
    "Settings",
    "Shift",
    "Update MOH's from MS Project",
    "Add Action",
    "View Actions",
    "ERRORS",
    "View and Set Resource Constraints",
    "Show Search",
    "Principales/Lances",
    "Filter for MS Project",
    "[ - ] Collapse All MOH",
    "Dept.View",
    "Tasks",
    "Process Critical",
    "Person",
    "Action",
    "Date",
    "Due Date",
    "Cancel",
    "OK",
    "Help/Overview Guide ?",
    "Shared Res View",
    "Type",
    "Resource Levelling Tool",
    "Alcoa - Resource Levelling Tool",
    "SHOW ALL",
    "FILTERS",
    "OUTSTANDINGS",
    "NEW",
    "ACTIONS (Selected Actions)",
    "Export Actions",
    "Mark as Complete",
    "Email",
    "Print Changes",
    "Delete Highlighted",
    "Set Resource Hrs and Qtys",
    "Manage Companies",
    "Please Wait",
    "Loading",
    "Expand All",
    "Collapse All",
    "Group by Resource then Department (default)",
    "Group by Departement the Resource",
    "Resource",
    "Manage Exceptions",
    "Department",
    "Start Date",
    "End Date",
    "Day",
    "Day Hrs",
    "Day Qty",
    "Night Hrs",
    "Night Qty",
    "Crew Information",
    "Crew",
    "Change Date",
    "Changed By",
    "Emp. No.",
    "Employee Name",
    "Reports",
    "Department Levelling",
    "Plan Errors",
    "Assign Dept",
    "Start",
    "Actions (Selected Errors)",
    "Print Errors",
    "Select",
    "Errors",
    "Department Code",
    "Use Averaging Method",
    "TimeFrame",
    "Vertical View",
    "Horizontal View",
    "Location View (I or K)",
    "12 Mth MOH Schedule",
    "All Data",
    "Process Critical (K or J)",
    "Top 20 Mat.",
    "List Changes",
    "Align. Req'd",
    "PRA Req'd",
    "Impact Views",
    "(Un)Check All",
    "Algn. Rqd.",
    "Approval Log",
    "Manage && Create/Edit",
    "Actions",
    "Add",
    "View",
    "Long Term Filters",
    "Current Year",
    "Next Full Year",
    "Approvals",
    "Align.",
    "All",
    "Extreme",
    "Asset not in Matrix",
    "Work Order",
    "Scheduled Dates",
    "Schedule Alignment Required",
    "Asset Number",
    "Job Type",
    "End",
    "Align. Code",
    "Risk Code",
    "Job Churn",
    "Alignment Tool",
    "Add / Edit Comment",
    "Date:",
    "Work Order #:",
    "Asset Number:",
    "Asset Activity:",
    "Select Color:",
    "Comment:",
    "Delete",
    "Last Modified By: n/a",
    "Last Modified Date: n/a",
    "Settings",
    "Alignment Constraints",
    "My Groups",
    "Horizontal Groups",
    "Process Risk Assessment & Action Plan - Risk Impacts Template",
    "Users/Roles",
    "(1) Individual Jobs",
    "(2) Asset vs Asset Clash",
    "(3) Asset Scheduling",
    "(4) Asset vs Asset Days Between",
    "Read Only Tabular View:",
    "Find",
    "Clear",
    "Else click button(s) to view/edit the graphical Matrix:",
    "Risk Desc.",
    "Impact Code",
    "Impact Desc",
    "Asset Number X",
    "Asset Number Y",
    "Read Only Tabular View:",
    "Add New Constraint",
    "Edit Selected",
    "Delete Selected",
    "Note: Please contact Yujia to add/Edit/Delete constraints",
    "Restriction Start",
    "Restriction End",
    "> Days Apart",
    "Filter Name",
    "Filter String",
    "Created By User Id",
    "Created Date",
    "Created By User Logon",
    "Created By",
    "User Logon",
    "User Full Name",
    "User Email",
    "Default Site Name",
    "Default Area Name",
    "ECT Group Leader",
    "OC Dept. Supervisor",
    "PC Supervisor",
    "Add New Group",
    "Ordinal",
    "Risk Impact Name",
    "Alignment Schedule Id",
    "Owning Department",
    "WKs To Go",
    "Iso Week Year",
    "Bldg",
    "WO Description",
    "Scheduled Date Start",
    "Scheduled Date End",
    "Asset Activity",
    "Job Type",
    "MOH Status",
    "In Matrix",
    "Work Order",
    "Scheduled Dates",
    "Schedule Alignment Required",
    "Process Risk Assessment & Action Plan",
    "Action",
    "WO Description",
    "Asset Number",
    "Align. Code",
    "Risk Code",
    "Currently With",
    "Revision",
    "Return to the Alignment Tool (Close) X",
    "Print",
    "Process Risk Assessments & Action Plans Management",
    "FILTERS - Status",
    "NOT STARTED",
    "DRAFT",
    "Pending Approval",
    "Pending Reviewal",
    "Approved",
    "FILTERS - Currently With",
    "ECT Group Leader (100)",
    "OC Dept. Supervisor (100)",
    "PC Supervisor (100)",
    "Current Schedule",
    "Archive (Includes all created Process Risk Assessments && Action Plans)",
    "Alignment Approval Id",
    " Alignment Approval Status Id",
    "Align Code",
    "Approved By",
    "Reviewed By",
    "Work Order No",
    "Work Order Desc",
    "Schd Start Date",
    "Schd End Date",
    "Last Modified Date",
    "Current Plan",
    "Archive",
    "Work Order Description",
    "Building",
    "Date Due",
    "OUTSTANDING",
    "OVERDUE",
    "From Process Risk Assessment",
    "ACTIONS (Selected Action)",
    "Date Entered",
    "Risk Impact",
    "Describe Risk",
    "Action Required",
    "When",
    "Complete",
    "Area",
    "Group Name",
    "Group Description",
    "Created Date",
    "Please Select View:",
    "Please Select Timeframe:",
    "Label (1-3 Characters only):",
    "Revision #",
    "Submit for Approvals",
    "View Printable Version (A4 PDF)",
    "View Previous",
    "Make Standard",
    "Header Information",
    "Work Order",
    "Asset",
    "Description",
    "Site Area",
    "Activity",
    "Status:",
    "Log:",
    "Add Comment",
    "Reject (Reset to Draft)",
    "Date",
    "Log Text",
    "By",
    "Approvals:",
    "Not Required",
    "OC Dept. Supervisor (R1+)",
    "OC Dept. Supervisor on behalf of OC/Dept. Manager (R2+)",
    "PC Supervisor (R3+)",
    "PC Supervisor on behalf of Prod and M&&R Manager (R4+)",
    "PC Supervisor (Review)",
    "Previous",
    "Next",
    "Work Scope Executive Summary",
    "(Describe key work scope elements in space below)",
    "Start Date",
    "Completion Date",
    "Duration",
    "Upload Sched/Key Milestone",
    "Browse...",
    "Delete",
    "Key comments related to Schedule/Key Milestones",
    "Click each Risk Impact as required to add it to the Action Plan:",
    "(Add other Risk Impact)",
    "ACTIONS (Selected Action)",
    "Edit",
    "Mark as Complete",
    "Email",
    "Risk Impact",
    "Describe Risk",
    "Describe Action Required to Eliminate/Mitigate Risk",
    "When",
    "Complete",
    "Scheduled Start Date:",
    "Scheduled Completion Date:",
    "Column",
    "Operator",
    "Value",
    "Recent changes/updates have been made to this REX Tool as detailed below to assist you in understanding any system or processes changes:",
    "Change Log",
    "Upcoming Changes",
    "Quick Reference Guide",
    "Note: Green Rows Indicate Proposed Change Matches EAM Schedule.",
    "Area",
    "Apply",
    "Site/Area",
    "Building",
    "Asset Number",
    "WO No.",
    "Job Type",
    "Work Order Description",
    "Schd Start Date",
    "Schd End Date",
    "Schd Start Date (EAM)",
    "Schd End Date (EAM)",
    "Stock #",
    "Total Cost",
    "Auto Request",
    "WO Schedule Date",
    "Viewed && Approved",
    "Approval Log",
    "Inventory Items WO Status Released",
    "Inventory Items WO Status Un-Released/Draft",
    "Item Description",
    "Qty Required",
    "Qty Issued",
    "Total Cost ($)",
    "Approved By",
    "Group Desc.",
    "Grouping:",
    "Level",
    "Sub Level",
    "Filter Name",
    "Filter Criterea",
    "Copy Current",
    "Wizard",
    "(Filter Criterea Automatically Copied from Main Screen)",
    "Risk Impact",
    "Ordinal",
    "Recent changes/updates have been made to this REX Tool as detailed below to assist you in understanding any system or processes changes:",
];

pub fn ui_labels() -> Vec<String> {
    UI_LABELS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_keep_order_and_duplicates() {
        assert_eq!(UI_LABELS.len(), 325);
        assert_eq!(UI_LABELS[0], "Settings");
        assert_eq!(UI_LABELS[1], "Shift");
        assert_eq!(UI_LABELS.iter().filter(|l| **l == "Settings").count(), 2);
        assert_eq!(ui_labels().len(), UI_LABELS.len());
    }
}
