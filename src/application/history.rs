// History filtering - Narrows series and analyses to the queried range
use crate::domain::analysis::{Analysis, GraphQuery};
use crate::domain::series::TimeSeries;
use chrono::{DateTime, Utc};

fn in_range(date: DateTime<Utc>, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> bool {
    from.is_none_or(|from| date >= from) && to.is_none_or(|to| date <= to)
}

/// Keeps only the points inside the query's date range, per series. Every
/// series is filtered by the same predicate over identical timestamps, so
/// index alignment across series survives; series left empty are kept so
/// the graph legend stays stable.
pub fn filter_series(series: &[TimeSeries], query: &GraphQuery) -> Vec<TimeSeries> {
    if query.from.is_none() && query.to.is_none() {
        return series.to_vec();
    }
    series
        .iter()
        .map(|serie| {
            let data = serie
                .data
                .iter()
                .filter(|point| in_range(point.time, query.from, query.to))
                .copied()
                .collect();
            TimeSeries::new(serie.name.clone(), serie.translated_name.clone(), data)
        })
        .collect()
}

/// Keeps the analyses inside the query's date range; with a category set,
/// only analyses carrying at least one event of that category remain.
pub fn filter_analyses(analyses: &[Analysis], query: &GraphQuery) -> Vec<Analysis> {
    analyses
        .iter()
        .filter(|analysis| in_range(analysis.date, query.from, query.to))
        .filter(|analysis| match &query.category {
            Some(category) => analysis
                .events
                .iter()
                .any(|event| event.category == *category),
            None => true,
        })
        .cloned()
        .collect()
}
