//! Endpoint catalogue for the engine's HTTP API.
//!
//! One `pub const` [`Endpoint`] record per remote operation, grouped by
//! API section. The catalogue is pure data; the request assembly for
//! every record is the single procedure in [`crate::endpoint`].

pub mod configs;
pub mod containers;
pub mod distribution;
pub mod exec;
pub mod images;
pub mod networks;
pub mod nodes;
pub mod plugins;
pub mod secrets;
pub mod services;
pub mod session;
pub mod swarm;
pub mod system;
pub mod tasks;
pub mod volumes;

use crate::endpoint::Endpoint;

/// Every operation in the catalogue.
pub const ALL: &[&Endpoint] = &[
    // Containers
    &containers::LIST,
    &containers::CREATE,
    &containers::INSPECT,
    &containers::TOP,
    &containers::LOGS,
    &containers::CHANGES,
    &containers::EXPORT,
    &containers::STATS,
    &containers::RESIZE,
    &containers::START,
    &containers::STOP,
    &containers::RESTART,
    &containers::KILL,
    &containers::UPDATE,
    &containers::RENAME,
    &containers::PAUSE,
    &containers::UNPAUSE,
    &containers::ATTACH,
    &containers::ATTACH_WS,
    &containers::WAIT,
    &containers::REMOVE,
    &containers::ARCHIVE_INFO,
    &containers::ARCHIVE,
    &containers::PUT_ARCHIVE,
    &containers::PRUNE,
    // Images
    &images::LIST,
    &images::BUILD,
    &images::BUILD_PRUNE,
    &images::CREATE,
    &images::INSPECT,
    &images::HISTORY,
    &images::PUSH,
    &images::TAG,
    &images::REMOVE,
    &images::SEARCH,
    &images::PRUNE,
    &images::COMMIT,
    &images::EXPORT,
    &images::EXPORT_ALL,
    &images::LOAD,
    // System
    &system::AUTH,
    &system::INFO,
    &system::VERSION,
    &system::PING,
    &system::PING_HEAD,
    &system::EVENTS,
    &system::DATA_USAGE,
    // Exec
    &exec::CREATE,
    &exec::START,
    &exec::RESIZE,
    &exec::INSPECT,
    // Volumes
    &volumes::LIST,
    &volumes::CREATE,
    &volumes::INSPECT,
    &volumes::REMOVE,
    &volumes::PRUNE,
    // Networks
    &networks::LIST,
    &networks::INSPECT,
    &networks::REMOVE,
    &networks::CREATE,
    &networks::CONNECT,
    &networks::DISCONNECT,
    &networks::PRUNE,
    // Plugins
    &plugins::LIST,
    &plugins::PRIVILEGES,
    &plugins::PULL,
    &plugins::INSPECT,
    &plugins::REMOVE,
    &plugins::ENABLE,
    &plugins::DISABLE,
    &plugins::UPGRADE,
    &plugins::CREATE,
    &plugins::PUSH,
    &plugins::SET,
    // Swarm
    &swarm::INSPECT,
    &swarm::INIT,
    &swarm::JOIN,
    &swarm::LEAVE,
    &swarm::UPDATE,
    &swarm::UNLOCK_KEY,
    &swarm::UNLOCK,
    // Nodes
    &nodes::LIST,
    &nodes::INSPECT,
    &nodes::REMOVE,
    &nodes::UPDATE,
    // Services
    &services::LIST,
    &services::CREATE,
    &services::INSPECT,
    &services::REMOVE,
    &services::UPDATE,
    &services::LOGS,
    // Tasks
    &tasks::LIST,
    &tasks::INSPECT,
    &tasks::LOGS,
    // Secrets
    &secrets::LIST,
    &secrets::CREATE,
    &secrets::INSPECT,
    &secrets::REMOVE,
    &secrets::UPDATE,
    // Configs
    &configs::LIST,
    &configs::CREATE,
    &configs::INSPECT,
    &configs::REMOVE,
    &configs::UPDATE,
    // Distribution
    &distribution::INSPECT,
    // Session
    &session::START,
];

/// Resolves an operation by its documented name (e.g. `"ContainerList"`).
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Endpoint> {
    ALL.iter().copied().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Location;
    use std::collections::HashSet;

    #[test]
    fn catalogue_is_complete() {
        assert_eq!(ALL.len(), 106);
    }

    #[test]
    fn operation_names_are_unique() {
        let names: HashSet<&str> = ALL.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn lookup_resolves_by_name() {
        let endpoint = lookup("ContainerList").unwrap();
        assert_eq!(endpoint.path, "/containers/json");
        assert!(lookup("NoSuchOperation").is_none());
    }

    #[test]
    fn every_placeholder_has_a_declared_path_parameter() {
        for endpoint in ALL {
            let declared: HashSet<&str> = endpoint
                .params
                .iter()
                .filter(|p| p.location == Location::Path)
                .map(|p| p.name)
                .collect();

            let mut placeholders = HashSet::new();
            let mut rest = endpoint.path;
            while let Some(start) = rest.find('{') {
                let end = rest[start..].find('}').expect("unterminated placeholder") + start;
                placeholders.insert(&rest[start + 1..end]);
                rest = &rest[end + 1..];
            }

            assert_eq!(
                placeholders, declared,
                "placeholder/parameter mismatch in {}",
                endpoint.name
            );
        }
    }

    #[test]
    fn at_most_one_body_parameter_per_operation() {
        for endpoint in ALL {
            let bodies = endpoint
                .params
                .iter()
                .filter(|p| p.location == Location::Body)
                .count();
            assert!(bodies <= 1, "{} declares {} bodies", endpoint.name, bodies);
        }
    }

    #[test]
    fn defaults_only_appear_on_query_parameters() {
        for endpoint in ALL {
            for param in endpoint.params {
                if param.default.is_some() {
                    assert_eq!(
                        param.location,
                        Location::Query,
                        "non-query default on {}.{}",
                        endpoint.name,
                        param.name
                    );
                }
            }
        }
    }

    #[test]
    fn json_expectation_follows_the_accept_type() {
        assert!(containers::LIST.expects_json());
        assert!(system::DATA_USAGE.expects_json());
        assert!(!containers::EXPORT.expects_json());
        assert!(!containers::ARCHIVE.expects_json());
        assert!(!system::PING.expects_json());
        assert!(!session::START.expects_json());
    }

    #[test]
    fn path_parameters_are_always_required() {
        for endpoint in ALL {
            for param in endpoint.params {
                if param.location == Location::Path {
                    assert!(param.required, "optional path param {}", param.name);
                }
            }
        }
    }
}
