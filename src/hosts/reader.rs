//! Reading the `hosts-definition` table (CSV export of the worksheet).

use crate::config::HOSTS_DEFINITION_HEADERS;
use crate::error::{Error, Result};
use crate::models::{parse_ipv4_addr, parse_mac_addr, HostDefinition};
use csv::StringRecord;
use std::path::Path;

/// Read and parse a host table file.
pub fn read_hosts_definition_file(input_file: &Path) -> Result<Vec<HostDefinition>> {
    log::info!("Reading hosts definition from: {}", input_file.display());
    let content = std::fs::read_to_string(input_file)?;
    let definition = parse_hosts_definition(&content)?;
    log::debug!("rows: {definition:#?}");
    Ok(definition)
}

/// Parse host table text.
///
/// The first row is the header. Blank lines and `#` comments are skipped,
/// columns past the fourth are ignored, and empty address cells are absent
/// values.
pub fn parse_hosts_definition(content: &str) -> Result<Vec<HostDefinition>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let header = csv_reader.headers()?;
    if header.is_empty() {
        return Ok(Vec::new());
    }
    let header: Vec<String> = header.iter().map(str::to_lowercase).collect();
    if !header.iter().map(String::as_str).eq(HOSTS_DEFINITION_HEADERS) {
        log::warn!("unexpected header {header:?}, expected {HOSTS_DEFINITION_HEADERS:?}");
    }

    let mut definition = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or_default();
        definition.push(parse_record(line, &record)?);
    }
    Ok(definition)
}

fn parse_record(line: usize, record: &StringRecord) -> Result<HostDefinition> {
    let invalid = |reason: String| Error::InvalidHostDefinition { line, reason };
    let cell = |i: usize| record.get(i).unwrap_or("");

    let hostname = cell(0);
    if hostname.is_empty() {
        return Err(invalid("empty hostname".to_string()));
    }

    let ip_address = match cell(2) {
        "" => None,
        ip => Some(parse_ipv4_addr(ip).map_err(|e| invalid(e.to_string()))?),
    };
    let mac_address = match cell(3) {
        "" => None,
        mac => Some(parse_mac_addr(mac).map_err(|e| invalid(e.to_string()))?),
    };

    Ok(HostDefinition {
        hostname: hostname.to_string(),
        domain: cell(1).to_string(),
        ip_address,
        mac_address,
    })
}
