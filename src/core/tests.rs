#[cfg(test)]
mod tests_impl {
    use crate::core::nat::NatRuleSet;
    use crate::core::ports::{parse_port_specs, Protocol};

    fn spec_round_trip(ports: &str, hairpin: bool) -> String {
        NatRuleSet {
            public_ip: "195.136.68.11".to_string(),
            dest_ip: "172.16.1.10".to_string(),
            gateway_ip: None,
            hairpin,
            app: String::new(),
            entries: parse_port_specs(ports).unwrap(),
        }
        .to_ros_text()
    }

    #[test]
    fn test_round_trip_single_port_hairpin() {
        let text = spec_round_trip("32400/tcp", true);

        let adds = text
            .lines()
            .filter(|l| l.starts_with("/ip firewall nat add"))
            .count();
        assert_eq!(adds, 3);

        // Derived gateway lands in the src-nat rewrite
        assert!(text.contains("to-addresses=172.16.1.1 \\"));
        assert!(text.contains("chain=srcnat action=src-nat"));
    }

    #[test]
    fn test_round_trip_single_port_no_hairpin() {
        let text = spec_round_trip("32400/tcp", false);

        let adds = text
            .lines()
            .filter(|l| l.starts_with("/ip firewall nat add"))
            .count();
        assert_eq!(adds, 1);
    }

    #[test]
    fn test_round_trip_mixed_protocols() {
        let entries = parse_port_specs("21/TCP,40000-40010/tcp,2001/udp").unwrap();
        assert_eq!(entries[0].protocol, Protocol::Tcp);
        assert_eq!(entries[2].protocol, Protocol::Udp);

        let ruleset = NatRuleSet {
            public_ip: "203.0.113.7".to_string(),
            dest_ip: "192.168.88.20".to_string(),
            gateway_ip: None,
            hairpin: true,
            app: "ftp".to_string(),
            entries,
        };
        let text = ruleset.to_ros_text();

        // Case-folded protocol appears lowercase in rule text
        assert!(text.contains("protocol=tcp"));
        assert!(text.contains("protocol=udp"));
        assert!(!text.contains("protocol=TCP"));

        // App label reaches every comment kind
        assert!(text.contains("comment=\"ftp: dstnat 192.168.88.20:21/tcp\""));
        assert!(text.contains("comment=\"ftp: hairpin srcnat 192.168.88.20:2001/udp\""));

        // Default gateway for the 192.168.88.0 subnet
        assert!(text.contains("to-addresses=192.168.88.1 \\"));
    }

    #[test]
    fn test_parser_failure_produces_no_rules() {
        // The pipeline never reaches the formatter on a bad spec, so a
        // half-valid input can never emit a half rule set
        assert!(parse_port_specs("80/tcp,70000/tcp").is_err());
    }
}
