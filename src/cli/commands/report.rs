use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::payroll::PayrollLogic;
use crate::core::period::{pay_period, period_containing};
use crate::db::log::ttlog_nonblocking;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::{DayStatus, DeductionCategory, PayrollReport};
use crate::ui::messages::header;
use crate::utils::colors::{
    GREY, RESET, color_for_amount, color_for_status, colorize_in_out, colorize_optional,
};
use crate::utils::date;
use crate::utils::formatting::{bold, deduction, money};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        period,
        from,
        to,
        details,
        export,
        format,
        force,
    } = cmd
    {
        //
        // 1) Resolve the range
        //
        let (start, end) = resolve_range(period, from, to, cfg)?;

        //
        // 2) Build the report
        //
        let pool = DbPool::open(&cfg.database)?;
        let report = PayrollLogic::generate(&pool, &cfg.payroll, start, end)?;

        //
        // 3) Output
        //
        if *details {
            print_days(&report, cfg);
        }
        print_summary(&report, cfg);

        if let Some(file) = export {
            ExportLogic::export_report(&report, *format, file, *force)?;
            ttlog_nonblocking(
                &pool.conn,
                "export",
                file,
                &format!("Report {} → {} exported as {}", start, end, format.as_str()),
            );
        }
    }

    Ok(())
}

fn resolve_range(
    period: &Option<String>,
    from: &Option<String>,
    to: &Option<String>,
    cfg: &Config,
) -> AppResult<(NaiveDate, NaiveDate)> {
    if let (Some(f), Some(t)) = (from, to) {
        return Ok((date::parse_date(f)?, date::parse_date(t)?));
    }

    match period {
        Some(p) => {
            let (y, m) = date::parse_month(p)?;
            pay_period(y, m, &cfg.payroll)
        }
        None => period_containing(date::today(), &cfg.payroll),
    }
}

fn clock(t: Option<chrono::NaiveTime>) -> String {
    t.map(|t| t.to_string()).unwrap_or_else(|| "--:--".into())
}

fn print_days(report: &PayrollReport, cfg: &Config) {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Status"),
        Column::left("In"),
        Column::left("Out"),
        Column::right("Deduction"),
        Column::left("Note"),
    ]);

    for d in &report.days {
        let color = color_for_status(d.status);
        let note = if report.late_day_cut_dates.contains(&d.date) {
            "late count → day cut"
        } else if d.counts_as_late {
            "late count"
        } else {
            ""
        };

        table.add_row(vec![
            date::format_date(d.date, &cfg.show_weekday),
            format!("{color}{}{RESET}", d.status.as_str()),
            colorize_in_out(&clock(d.time_in), true),
            colorize_in_out(&clock(d.time_out), false),
            colorize_optional(&deduction(d.deduction)),
            format!("{GREY}{note}{RESET}"),
        ]);
    }

    print!("{}", table.render());
    println!();
}

fn print_summary(report: &PayrollReport, cfg: &Config) {
    header(format!(
        "Payroll report {} → {}",
        report.period_start, report.period_end
    ));

    let b = &report.breakdown;
    println!("Working days      : {}", report.total_working_days);
    println!(
        "Holidays          : {}   Rest days: {}",
        report.count(DayStatus::Holiday),
        report.count(DayStatus::RestDay)
    );
    println!("Full-day amount   : {}", money(report.full_day_amount));
    println!("Gross             : {}", money(report.gross));
    println!();

    for (cat, count, label) in [
        (DeductionCategory::Absence, b.absent_days, "Absences"),
        (DeductionCategory::HalfDay, b.half_days, "Half days"),
        (DeductionCategory::HourCut, b.hour_cuts, "Hour cuts"),
        (DeductionCategory::LateDayCut, b.late_day_cuts, "Late day cuts"),
    ] {
        println!(
            "{:<18}: {:>3}  {}",
            label,
            count,
            colorize_optional(&deduction(b.amount(cat)))
        );
    }
    println!("Late arrivals     : {:>3}", b.late_arrivals);
    if cfg.payroll.paid_days_off_per_period > 0 {
        println!(
            "Paid days off     : {:>3} of {}",
            b.paid_days_off, cfg.payroll.paid_days_off_per_period
        );
    }
    println!();

    println!("Total deductions  : {}", deduction(report.total_deductions));
    println!(
        "{}",
        bold(&format!(
            "Net               : {}{}{}",
            color_for_amount(report.net),
            money(report.net),
            RESET
        ))
    );

    if cfg.payroll.show_net_to_date
        && let Some(to_date) = report.net_to_date(date::today())
    {
        println!(
            "Net to date       : {}{}{}",
            color_for_amount(to_date),
            money(to_date),
            RESET
        );
    }
}
