use crate::models::{Command, Host, Os, Note, Project, Service, OS_WEIGHT, TOOL};
use crate::nmap::{HostRecord, PortRecord, ScanReport};

/// Build a Lair project from an nmap scan report.
///
/// Hosts that are not up and ports that are not open are dropped. Every
/// emitted host carries the same `tags`.
pub fn build_project(report: &ScanReport, project_id: &str, tags: &[String]) -> Project {
    let hosts = report
        .hosts
        .iter()
        .filter(|h| h.is_up())
        .map(|h| build_host(h, tags))
        .collect();

    Project {
        id: project_id.to_string(),
        tool: TOOL.to_string(),
        commands: vec![Command {
            tool: TOOL.to_string(),
            command: report.args.clone(),
        }],
        hosts,
    }
}

fn build_host(record: &HostRecord, tags: &[String]) -> Host {
    let mut host = Host {
        tags: tags.to_vec(),
        ..Default::default()
    };

    // No primary marker in nmap output: the last address of each type wins.
    for address in &record.addresses {
        match address.addr_type.as_str() {
            "ipv4" => host.ipv4 = address.addr.clone(),
            "mac" => host.mac = address.addr.clone(),
            _ => {}
        }
    }

    host.hostnames = record.hostnames().map(str::to_string).collect();
    host.services = record
        .ports()
        .iter()
        .filter(|p| p.is_open())
        .map(build_service)
        .collect();

    host.os = record.os_matches().first().map(|best| Os {
        tool: TOOL.to_string(),
        weight: OS_WEIGHT,
        fingerprint: best.name.clone(),
    });

    host
}

fn build_service(port: &PortRecord) -> Service {
    let mut service = Service {
        port: port.port_id,
        protocol: port.protocol.clone(),
        ..Default::default()
    };

    if let Some(info) = port.service.as_ref().filter(|s| !s.name.is_empty()) {
        service.service = info.name.clone();
        service.product = describe_product(&info.product, &info.version);
    }

    service.notes = port
        .scripts
        .iter()
        .map(|script| Note {
            title: script.id.clone(),
            content: script.output.clone(),
            last_modified_by: TOOL.to_string(),
        })
        .collect();

    service
}

fn describe_product(product: &str, version: &str) -> String {
    match (product.is_empty(), version.is_empty()) {
        (true, _) => "Unknown".to_string(),
        (false, true) => product.to_string(),
        (false, false) => format!("{} {}", product, version),
    }
}
