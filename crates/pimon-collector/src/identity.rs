use crate::ProcPaths;
use std::fs;
use std::net::UdpSocket;

/// Hostname as reported by the kernel; `"unknown"` when unavailable.
pub fn hostname() -> String {
    sysinfo::System::host_name().unwrap_or_else(|| "unknown".to_string())
}

/// Best-effort outbound IPv4 address.
///
/// Connecting a UDP socket to a well-known public address performs a pure
/// route lookup (no packet is sent); the local endpoint the kernel picks
/// is the address other hosts on the network reach us at. Falls back to
/// `"unknown"` when no route exists.
pub fn outbound_ip() -> String {
    fn lookup() -> Option<String> {
        let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
        socket.connect("8.8.8.8:80").ok()?;
        Some(socket.local_addr().ok()?.ip().to_string())
    }
    lookup().unwrap_or_else(|| "unknown".to_string())
}

/// Device identity string.
///
/// SoC boards expose a NUL-terminated model string in the device tree;
/// on other hosts the os-release pretty name stands in. Falls back to
/// `"Unknown Model"` when neither is readable.
pub fn model(paths: &ProcPaths) -> String {
    if let Ok(raw) = fs::read_to_string(&paths.device_tree_model) {
        let model = raw.replace('\0', "").trim().to_string();
        if !model.is_empty() {
            return model;
        }
    }

    if let Ok(content) = fs::read_to_string(&paths.os_release) {
        for line in content.lines() {
            if let Some(value) = line.strip_prefix("PRETTY_NAME=") {
                return value.trim().trim_matches('"').to_string();
            }
        }
    }

    "Unknown Model".to_string()
}
