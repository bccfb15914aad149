use serde::{Deserialize, Serialize};

/// Tool attribution stored on commands, OS guesses and notes.
pub const TOOL: &str = "nmap";

/// Weight assigned to an nmap OS guess.
pub const OS_WEIGHT: u32 = 50;

/// A Lair project as accepted by the API server's import endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub tool: String,
    #[serde(default)]
    pub commands: Vec<Command>,
    #[serde(default)]
    pub hosts: Vec<Host>,
}

/// The command line that produced the imported data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub tool: String,
    pub command: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Host {
    pub tags: Vec<String>,
    pub ipv4: String,
    pub mac: String,
    pub hostnames: Vec<String>,
    pub services: Vec<Service>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<Os>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub port: u16,
    pub protocol: String,
    pub service: String,
    pub product: String,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub title: String,
    pub content: String,
    pub last_modified_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Os {
    pub tool: String,
    pub weight: u32,
    pub fingerprint: String,
}

impl Project {
    /// Total number of services across all hosts.
    pub fn service_count(&self) -> usize {
        self.hosts.iter().map(|h| h.services.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_wire_field_names() {
        let project = Project {
            id: "abc123".to_string(),
            tool: TOOL.to_string(),
            commands: vec![Command { tool: TOOL.to_string(), command: "nmap -sV 10.0.0.1".to_string() }],
            hosts: vec![Host {
                tags: vec!["web".to_string()],
                ipv4: "10.0.0.1".to_string(),
                services: vec![Service {
                    port: 80,
                    protocol: "tcp".to_string(),
                    service: "http".to_string(),
                    product: "Apache 2.4".to_string(),
                    notes: vec![Note {
                        title: "http-title".to_string(),
                        content: "It works".to_string(),
                        last_modified_by: TOOL.to_string(),
                    }],
                }],
                os: Some(Os { tool: TOOL.to_string(), weight: OS_WEIGHT, fingerprint: "Linux 5.15".to_string() }),
                ..Default::default()
            }],
        };

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["_id"], "abc123");
        assert_eq!(value["commands"][0]["command"], "nmap -sV 10.0.0.1");
        assert_eq!(value["hosts"][0]["ipv4"], "10.0.0.1");
        assert_eq!(value["hosts"][0]["mac"], "");
        assert_eq!(value["hosts"][0]["os"], json!({"tool": "nmap", "weight": 50, "fingerprint": "Linux 5.15"}));
        assert_eq!(value["hosts"][0]["services"][0]["notes"][0]["lastModifiedBy"], "nmap");
        assert_eq!(project.service_count(), 1);
    }

    #[test]
    fn test_host_without_os_omits_field() {
        let value = serde_json::to_value(Host::default()).unwrap();
        assert!(value.get("os").is_none());
        assert_eq!(value["hostnames"], json!([]));
    }
}
