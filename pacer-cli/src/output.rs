use clap::ValueEnum;
use pacer::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `key=value` lines, loadable as a JMeter property file
    Properties,
    Json,
}

/// Render the published values in `sink`, or `None` when nothing was published.
pub fn render(sink: &impl PublicationSink, format: Format) -> anyhow::Result<Option<String>> {
    let values: BTreeMap<_, _> = [OUT_USERS_KEY, OUT_THINK_KEY]
        .into_iter()
        .filter_map(|key| sink.get(key).map(|value| (key, value)))
        .collect();

    if values.is_empty() {
        return Ok(None);
    }

    let text = match format {
        Format::Properties => values
            .iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect(),
        Format::Json => serde_json::to_string_pretty(&values)? + "\n",
    };

    Ok(Some(text))
}
