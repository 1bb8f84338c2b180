// Plain-text rendering of analysis results. Presentation only: every
// function consumes the structured values the core produces and writes
// to stdout; nothing here feeds back into the analyzers.
use crate::model::{BacktestReport, DrawRecord, Prediction};

pub fn banner() {
    println!("==============================================");
    println!("  DRAWCAST - market draw pattern analysis");
    println!("==============================================");
}

pub fn prediction(market: &str, p: &Prediction) {
    println!("\n--- Today's prediction: {market} ---");
    println!(
        "Last draw {}: open pana {} / close pana {}",
        p.last_date.format("%d-%b-%Y"),
        p.last_open_pana,
        p.last_close_pana
    );
    println!("Predicted open digit : {}", p.pred_open);
    println!("Predicted close digit: {}", p.pred_close);
}

pub fn backtest(market: &str, report: &BacktestReport) {
    println!("\n--- Pass/fail record: {market} ---");
    println!("{:<12} {:>6} {:>5} {:>5}  {}", "Date", "Pana", "Jodi", "Calc", "Result");
    for row in &report.rows {
        println!(
            "{:<12} {:>6} {:>5} {:>5}  {}",
            row.date.format("%d-%b-%Y"),
            row.open_pana,
            format!("{:02}", row.jodi),
            row.predicted,
            if row.pass { "PASS" } else { "FAIL" }
        );
    }
    match report.accuracy {
        Some(pct) => println!(
            "\nAccuracy: {}/{} ({:.1}%)",
            report.pass_count, report.total_count, pct
        ),
        None => println!("\nAccuracy: n/a (no records evaluated)"),
    }
}

pub fn frequency(
    market: &str,
    window: usize,
    hot_digits: &[(u8, usize)],
    hot_jodis: &[(u8, usize)],
    red_count: usize,
) {
    println!("\n--- Last {window} draws analysis: {market} ---");
    println!("Hot open digits:");
    for (digit, count) in hot_digits {
        println!("  {digit} - seen {count} times");
    }
    println!("Hot jodis:");
    for (jodi, count) in hot_jodis {
        println!("  {jodi:02} - seen {count} times");
    }
    println!("Red jodis (open digit == close digit): {red_count}");
}

pub fn recent_records(market: &str, records: &[DrawRecord]) {
    println!("\n--- Last {} draws: {market} ---", records.len());
    println!("{:<12} {:>9} {:>5} {:>10}", "Date", "Open Pana", "Jodi", "Close Pana");
    for r in records {
        println!(
            "{:<12} {:>9} {:>5} {:>10}",
            r.date.format("%d-%b-%Y"),
            r.open_pana,
            format!("{:02}", r.jodi),
            r.close_pana
        );
    }
}

pub fn weekly_otc(market: &str, window: usize, digits: &[u8]) {
    println!("\n--- Weekly OTC suggestion: {market} ---");
    println!("Based on the last {window} draws.");
    let joined = digits
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" - ");
    println!("OTC digits: [ {joined} ]");
}
