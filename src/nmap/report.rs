//! Typed view of nmap's XML output (`nmap -oX`).
//!
//! Only the parts consumed by the project builder are modelled; every other
//! element (`runstats`, `times`, `extraports`, nested script tables, ...) is
//! skipped by the deserializer.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

use crate::errors::DroneError;

/// Root element: `<nmaprun>`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "nmaprun")]
pub struct ScanReport {
    /// Command line nmap was invoked with.
    #[serde(rename = "@args", default)]
    pub args: String,
    #[serde(rename = "host", default)]
    pub hosts: Vec<HostRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostRecord {
    pub status: Option<HostStatus>,
    #[serde(rename = "address", default)]
    pub addresses: Vec<Address>,
    pub hostnames: Option<Hostnames>,
    pub ports: Option<Ports>,
    pub os: Option<OsDetection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostStatus {
    #[serde(rename = "@state", default)]
    pub state: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    #[serde(rename = "@addr", default)]
    pub addr: String,
    #[serde(rename = "@addrtype", default)]
    pub addr_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hostnames {
    #[serde(rename = "hostname", default)]
    pub hostnames: Vec<Hostname>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hostname {
    #[serde(rename = "@name", default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ports {
    #[serde(rename = "port", default)]
    pub ports: Vec<PortRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortRecord {
    #[serde(rename = "@protocol", default)]
    pub protocol: String,
    #[serde(rename = "@portid")]
    pub port_id: u16,
    pub state: Option<PortState>,
    pub service: Option<ServiceInfo>,
    #[serde(rename = "script", default)]
    pub scripts: Vec<Script>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortState {
    #[serde(rename = "@state", default)]
    pub state: String,
}

/// Service detection result (`-sV`). Absent attributes deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceInfo {
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@product", default)]
    pub product: String,
    #[serde(rename = "@version", default)]
    pub version: String,
}

/// NSE script result attached to a port.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(rename = "@id", default)]
    pub id: String,
    #[serde(rename = "@output", default)]
    pub output: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OsDetection {
    #[serde(rename = "osmatch", default)]
    pub matches: Vec<OsMatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OsMatch {
    #[serde(rename = "@name", default)]
    pub name: String,
}

impl ScanReport {
    /// Number of hosts nmap reported as up.
    pub fn up_host_count(&self) -> usize {
        self.hosts.iter().filter(|h| h.is_up()).count()
    }
}

impl HostRecord {
    pub fn is_up(&self) -> bool {
        self.status.as_ref().is_some_and(|s| s.state == "up")
    }

    pub fn ports(&self) -> &[PortRecord] {
        self.ports.as_ref().map(|p| p.ports.as_slice()).unwrap_or_default()
    }

    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.hostnames
            .iter()
            .flat_map(|hn| hn.hostnames.iter())
            .map(|h| h.name.as_str())
    }

    /// OS candidates, highest confidence first.
    pub fn os_matches(&self) -> &[OsMatch] {
        self.os.as_ref().map(|os| os.matches.as_slice()).unwrap_or_default()
    }
}

impl PortRecord {
    pub fn is_open(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.state == "open")
    }
}

/// Parse nmap XML bytes into a `ScanReport`.
pub fn parse_nmap_xml(xml: &[u8]) -> Result<ScanReport, DroneError> {
    // The deserializer accepts any root element name
    let root = root_element_name(xml)?;
    if root != "nmaprun" {
        return Err(DroneError::Input(format!(
            "Error parsing nmap XML: expected <nmaprun> root element, found <{root}>"
        )));
    }

    quick_xml::de::from_reader(xml)
        .map_err(|e| DroneError::Input(format!("Error parsing nmap XML: {e}")))
}

fn root_element_name(xml: &[u8]) -> Result<String, DroneError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(DroneError::Input("Error parsing nmap XML: document has no root element".into()));
            }
            Err(e) => {
                return Err(DroneError::Input(format!("Error parsing nmap XML: {e}")));
            }
            Ok(_) => {}
        }
        buf.clear();
    }
}
