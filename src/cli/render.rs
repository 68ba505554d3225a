//! Plain-text rendering of records and insight results.
//!
//! Every function here is pure: it formats values and never touches the network.

use std::fmt::Write;

use entity::Entity;

use crate::{
    controller::Route,
    model::insights::FundRiskDetail,
    service::{
        format_prediction_date, CatalogStats, FundLookup, InsightsOverview, PredictionsOverview,
        RiskOverview,
    },
};

/// Renders records as a table, one column per schema field in schema order.
pub fn table<E: Entity>(records: &[E]) -> String {
    let schema = E::KIND.schema();

    let header: Vec<String> = schema.fields.iter().map(|def| def.name.to_string()).collect();
    let rows: Vec<Vec<String>> = records.iter().map(cells).collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in std::iter::once(&header).chain(rows.iter()) {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }
    let _ = write!(out, "{} {} record(s)", records.len(), schema.label);

    out
}

/// Renders one record as `field: value` lines.
pub fn record<E: Entity>(record: &E) -> String {
    let schema = E::KIND.schema();
    let width = schema
        .fields
        .iter()
        .map(|def| def.name.len())
        .max()
        .unwrap_or(0);

    schema
        .fields
        .iter()
        .zip(cells(record))
        .map(|(def, value)| format!("{:<width$}  {}", def.name, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn cells<E: Entity>(record: &E) -> Vec<String> {
    E::KIND
        .schema()
        .fields
        .iter()
        .map(|def| {
            record
                .field(def.name)
                .map(|value| value.as_text().into_owned())
                .unwrap_or_default()
        })
        .collect()
}

pub fn route(route: &Route) -> String {
    match &route.pinned {
        Some(pinned) => format!("{} where {} = {}", route.kind, pinned.field, pinned.value),
        None => route.kind.to_string(),
    }
}

pub fn fund_lookup(lookup: &FundLookup) -> String {
    let prediction = &lookup.prediction;
    let class = &lookup.classification;

    format!(
        "{} ({})\n\
         NAV        {:.2} -> {:.2} ({:+.2}%) by {}, confidence {:.1}%\n\
         Class      {:?}, probability {:.1}%\n\
         Advice     {:?}",
        prediction.fund_name,
        prediction.fund_id,
        prediction.current_nav,
        prediction.predicted_nav,
        prediction.change_percentage,
        format_prediction_date(&prediction.prediction_date),
        prediction.confidence,
        class.performance_class,
        class.confidence * 100.0,
        class.recommendation,
    )
}

pub fn overview(overview: &InsightsOverview) -> String {
    let stats = &overview.stats;
    let mut out = String::new();

    let _ = writeln!(out, "Model accuracy  {:.1}%", stats.model_accuracy);
    let _ = writeln!(out, "Total funds     {}", stats.total_funds);
    let _ = writeln!(
        out,
        "Performance     high {} / medium {} / low {}",
        stats.high_performers, stats.medium_performers, stats.low_performers
    );
    let _ = writeln!(
        out,
        "Risk            high {}% / medium {}% / low {}%",
        overview.risk.high, overview.risk.medium, overview.risk.low
    );
    let _ = write!(out, "Recommendations");
    for (rank, rec) in overview.recommendations.iter().enumerate() {
        let _ = write!(
            out,
            "\n  {}. {} {} score {:.2} {:?} (risk {:?})",
            rank + 1,
            rec.fund_id,
            rec.fund_name,
            rec.investment_score,
            rec.recommendation,
            rec.risk_level
        );
    }

    out
}

pub fn predictions(predictions: &PredictionsOverview) -> String {
    let mut out = String::from("Top predictions");

    for (rank, prediction) in predictions.highlights.iter().enumerate() {
        let _ = write!(
            out,
            "\n  {}. {} {}  {:.2} -> {:.2} ({:+.2}%) by {}",
            rank + 1,
            prediction.fund_id,
            prediction.fund_name,
            prediction.current_nav,
            prediction.predicted_nav,
            prediction.change_percentage,
            format_prediction_date(&prediction.prediction_date),
        );
    }
    let _ = write!(out, "\nNAV series");
    for point in &predictions.series {
        let _ = write!(
            out,
            "\n  {}  {:.2} -> {:.2}",
            point.fund_id, point.current, point.predicted
        );
    }

    out
}

pub fn risk(risk: &RiskOverview) -> String {
    let assessment = &risk.assessment;
    let flagged = match assessment.high_risk_funds.is_empty() {
        true => "none".to_string(),
        false => assessment.high_risk_funds.join(", "),
    };
    let weights: Vec<String> = risk
        .feature_importance
        .iter()
        .map(|(name, weight)| format!("{} {:.2}", name, weight))
        .collect();

    format!(
        "{} funds flagged as high risk\n\
         Avg expense ratio  {:.2}%\n\
         Avg perf fee       {:.2}%\n\
         Recommendation     {}\n\
         High risk funds    {}\n\
         Feature importance {}",
        assessment.high_risk_count,
        assessment.avg_high_risk_expense,
        assessment.avg_high_risk_perf_fee,
        assessment.recommendation,
        flagged,
        weights.join(", "),
    )
}

pub fn fund_risk(detail: &FundRiskDetail) -> String {
    let mut out = format!(
        "{} ({})\n\
         Risk      {:?}, score {:.2}\n\
         Expense   {:.2}%\n\
         Perf fee  {:.2}%",
        detail.fund_name,
        detail.fund_id,
        detail.risk_level,
        detail.risk_score,
        detail.expense_ratio,
        detail.perf_fee,
    );
    if let Some(warning) = &detail.warning_message {
        let _ = write!(out, "\nWarning   {}", warning);
    }

    out
}

pub fn stats(stats: &CatalogStats) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} legal entities, {} funds, {} share classes, total AUM {:.2}M",
        stats.legal_entity_count,
        stats.fund_count,
        stats.share_class_count,
        stats.total_aum / 1_000_000.0
    );
    for (title, counts) in [
        ("Entity types", &stats.entity_types),
        ("Fund status", &stats.fund_statuses),
        ("Currencies", &stats.currencies),
    ] {
        let joined: Vec<String> = counts
            .iter()
            .map(|(key, count)| format!("{} {}", key, count))
            .collect();
        let _ = writeln!(out, "{:<13} {}", title, joined.join(", "));
    }
    let series: Vec<String> = stats
        .aum_millions
        .iter()
        .map(|(id, aum)| format!("{} {:.2}M", id, aum))
        .collect();
    let _ = write!(out, "{:<13} {}", "AUM", series.join(", "));

    out
}
