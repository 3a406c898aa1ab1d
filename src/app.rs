use chrono::NaiveDate;

use crate::cli::{Cli, Commands};
use crate::core::{
    AttendanceRecord, ClassInfo, DateFilter, DateInput, FormatMode, Role, Student, aggregate_report,
    day_roster, format_date, format_date_range, student_history, summarize,
};
use crate::data::{find_class, sample_classes, sample_records, sample_students};
use crate::error::AppError;
use crate::output::{
    TableOptions, output_history_csv, output_history_json, output_report_csv, output_report_json,
    output_roster_csv, output_roster_json, output_summary_json, print_history_table,
    print_report_table, print_roster_table, print_summary_table,
};
use crate::utils::parse_date;

/// Default signed-in student for the student role's own-history view; the
/// prototype has no session mechanism.
const DEFAULT_STUDENT: &str = "STU001";

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) filter: DateFilter,
    pub(crate) role: Role,
    pub(crate) class: Option<&'a ClassInfo>,
}

impl CommandContext<'_> {
    fn table_options(&self) -> TableOptions {
        TableOptions {
            role: self.role,
            use_color: self.cli.use_color(),
        }
    }

    /// Human label for the report window, rendered through the role-aware
    /// date formatter.
    fn range_label(&self) -> String {
        match (self.filter.since, self.filter.until) {
            (Some(s), Some(u)) => {
                format_date_range(&DateInput::from(s), &DateInput::from(u), self.role)
            }
            (Some(s), None) => format!(
                "from {}",
                format_date(&DateInput::from(s), FormatMode::Date, self.role)
            ),
            (None, Some(u)) => format!(
                "until {}",
                format_date(&DateInput::from(u), FormatMode::Date, self.role)
            ),
            (None, None) => "all records".to_string(),
        }
    }
}

/// Parse and validate the CLI date window.
fn build_filter(cli: &Cli, command: Commands, today: NaiveDate) -> Result<DateFilter, AppError> {
    if command.needs_today_filter() {
        return Ok(DateFilter::new(Some(today), Some(today)));
    }
    let since = cli.since.as_deref().map(parse_date).transpose()?;
    let until = cli.until.as_deref().map(parse_date).transpose()?;
    if let (Some(s), Some(u)) = (since, until)
        && s > u
    {
        return Err(AppError::InvalidRange {
            since: s.to_string(),
            until: u.to_string(),
        });
    }
    Ok(DateFilter::new(since, until))
}

fn handle_roster(records: &[AttendanceRecord], students: &[Student], date: NaiveDate, ctx: &CommandContext<'_>) {
    let rows = day_roster(records, students, date, ctx.class.map(|c| c.id));
    if ctx.cli.json {
        println!("{}", output_roster_json(&rows, date, ctx.role));
    } else if ctx.cli.csv {
        print!("{}", output_roster_csv(&rows, date, ctx.role));
    } else {
        print_roster_table(&rows, ctx.class, date, ctx.table_options());
    }
}

fn handle_history(
    records: &[AttendanceRecord],
    students: &[Student],
    classes: &[ClassInfo],
    ctx: &CommandContext<'_>,
) {
    let student_id = ctx.cli.student.as_deref().unwrap_or(DEFAULT_STUDENT);
    let history = student_history(records, student_id, &ctx.filter);
    // Machine output stays parseable for an empty window; only the table
    // view gets the prose placeholder
    if ctx.cli.json {
        println!("{}", output_history_json(&history, classes, ctx.role));
    } else if ctx.cli.csv {
        print!("{}", output_history_csv(&history, classes, ctx.role));
    } else if history.is_empty() {
        println!("No attendance records found for student {student_id}.");
    } else if let Some(student) = students.iter().find(|s| s.student_id == student_id) {
        print_history_table(&history, student, classes, ctx.table_options());
    }
}

fn handle_report(records: &[AttendanceRecord], students: &[Student], ctx: &CommandContext<'_>) {
    let rows = aggregate_report(records, students, &ctx.filter, ctx.class.map(|c| c.id));
    let label = ctx.range_label();
    if ctx.cli.json {
        println!("{}", output_report_json(&rows, &label));
    } else if ctx.cli.csv {
        print!("{}", output_report_csv(&rows));
    } else {
        print_report_table(&rows, &label, ctx.table_options());
    }
}

fn handle_summary(records: &[AttendanceRecord], ctx: &CommandContext<'_>) {
    let summary = summarize(records, &ctx.filter, ctx.class.map(|c| c.id));
    if ctx.cli.json {
        // A zeroed summary is still a valid document
        println!("{}", output_summary_json(&summary, &ctx.range_label()));
    } else if summary.total() == 0 {
        println!("No attendance records found for the specified date range.");
    } else {
        print_summary_table(&summary, &ctx.range_label(), ctx.table_options());
    }
}

pub(crate) fn run(cli: &Cli, today: NaiveDate) -> Result<(), AppError> {
    let command = cli.command.unwrap_or(Commands::Roster);
    let filter = build_filter(cli, command, today)?;

    let students = sample_students();
    let classes = sample_classes();
    let records = sample_records(today);

    let class = match cli.class.as_deref() {
        Some(selector) => Some(find_class(&classes, selector).ok_or_else(|| {
            AppError::UnknownClass {
                input: selector.to_string(),
            }
        })?),
        None => None,
    };

    let ctx = CommandContext {
        cli,
        filter,
        role: cli.viewer_role(),
        class,
    };

    match command {
        Commands::Roster | Commands::Today => {
            // Students see their own history; the day-sheet is a staff view
            if ctx.role == Role::Student {
                handle_history(&records, &students, &classes, &ctx);
            } else {
                let date = match (command, cli.date.as_deref()) {
                    (Commands::Today, _) | (_, None) => today,
                    (_, Some(raw)) => parse_date(raw)?,
                };
                handle_roster(&records, &students, date, &ctx);
            }
        }
        Commands::Report => handle_report(&records, &students, &ctx),
        Commands::Summary => handle_summary(&records, &ctx),
    }

    Ok(())
}
