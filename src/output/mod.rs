mod csv;
mod format;
mod json;
mod table;

pub(crate) use csv::{output_history_csv, output_report_csv, output_roster_csv};
pub(crate) use json::{output_history_json, output_report_json, output_roster_json, output_summary_json};
pub(crate) use table::{TableOptions, print_history_table, print_report_table, print_roster_table, print_summary_table};
