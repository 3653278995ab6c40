use failure::Error;

/// Known protocol versions: name, command start identifier, response
/// identifier.
pub const VERSIONS: &[(&str, &str, &str)] = &[
    ("v1", "REQUEST", "RESPONSE"),
    ("v2", "CMD_", "RSP_"),
    ("v3", "Command:", "Response:"),
];

#[derive(Clone, PartialEq, Debug)]
pub struct Identifiers {
    pub command_start: String,
    pub response: String,
}

impl Identifiers {
    pub fn new(command_start: &str, response: &str) -> Identifiers {
        Identifiers {
            command_start: command_start.to_string(),
            response: response.to_string(),
        }
    }
}

pub fn known_versions() -> Vec<&'static str> {
    VERSIONS.iter().map(|&(name, _, _)| name).collect()
}

pub fn lookup(version: &str) -> Result<Identifiers, Error> {
    match VERSIONS.iter().find(|&&(name, _, _)| name == version) {
        Some(&(_, command_start, response)) => Ok(Identifiers::new(command_start, response)),
        None => Err(format_err!(
            "Unknown protocol version '{}' (known versions: {})",
            version,
            known_versions().join(", ")
        )),
    }
}
