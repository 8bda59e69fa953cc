//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

// Schema paths and default values of the configuration nodes.

pub mod isis {
    use isisd_yang::YangPath;

    pub const PATH: YangPath = YangPath::new("/frr-isisd:isis");

    pub mod instance {
        use isisd_yang::YangPath;

        pub const PATH: YangPath = YangPath::new("/frr-isisd:isis/instance");

        pub mod area_tag {
            use isisd_yang::YangPath;

            pub const PATH: YangPath =
                YangPath::new("/frr-isisd:isis/instance/area-tag");
        }
        pub mod is_type {
            use isisd_yang::YangPath;

            pub const PATH: YangPath =
                YangPath::new("/frr-isisd:isis/instance/is-type");
            pub const DFLT: &str = "level-1-2";
        }
        pub mod area_address {
            use isisd_yang::YangPath;

            pub const PATH: YangPath =
                YangPath::new("/frr-isisd:isis/instance/area-address");
        }
        pub mod dynamic_hostname {
            use isisd_yang::YangPath;

            pub const PATH: YangPath =
                YangPath::new("/frr-isisd:isis/instance/dynamic-hostname");
            pub const DFLT: bool = true;
        }
        pub mod attached {
            use isisd_yang::YangPath;

            pub const PATH: YangPath =
                YangPath::new("/frr-isisd:isis/instance/attached");
        }
        pub mod overload {
            use isisd_yang::YangPath;

            pub const PATH: YangPath =
                YangPath::new("/frr-isisd:isis/instance/overload");
        }
        pub mod metric_style {
            use isisd_yang::YangPath;

            pub const PATH: YangPath =
                YangPath::new("/frr-isisd:isis/instance/metric-style");
            pub const DFLT: &str = "wide";
        }
        pub mod purge_originator {
            use isisd_yang::YangPath;

            pub const PATH: YangPath =
                YangPath::new("/frr-isisd:isis/instance/purge-originator");
        }
        pub mod lsp {
            pub mod mtu {
                use isisd_yang::YangPath;

                pub const PATH: YangPath =
                    YangPath::new("/frr-isisd:isis/instance/lsp/mtu");
                pub const DFLT: u16 = 1497;
            }
            pub mod refresh_interval {
                pub mod level_1 {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/lsp/refresh-interval/level-1",
                    );
                    pub const DFLT: u16 = 900;
                }
                pub mod level_2 {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/lsp/refresh-interval/level-2",
                    );
                    pub const DFLT: u16 = 900;
                }
            }
            pub mod maximum_lifetime {
                pub mod level_1 {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/lsp/maximum-lifetime/level-1",
                    );
                    pub const DFLT: u16 = 1200;
                }
                pub mod level_2 {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/lsp/maximum-lifetime/level-2",
                    );
                    pub const DFLT: u16 = 1200;
                }
            }
            pub mod generation_interval {
                pub mod level_1 {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/lsp/generation-interval/level-1",
                    );
                    pub const DFLT: u16 = 30;
                }
                pub mod level_2 {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/lsp/generation-interval/level-2",
                    );
                    pub const DFLT: u16 = 30;
                }
            }
        }
        pub mod spf {
            pub mod ietf_backoff_delay {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/spf/ietf-backoff-delay",
                );

                pub mod init_delay {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/spf/ietf-backoff-delay/init-delay",
                    );
                    pub const DFLT: u16 = 50;
                }
                pub mod short_delay {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/spf/ietf-backoff-delay/short-delay",
                    );
                    pub const DFLT: u16 = 200;
                }
                pub mod long_delay {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/spf/ietf-backoff-delay/long-delay",
                    );
                    pub const DFLT: u16 = 5000;
                }
                pub mod hold_down {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/spf/ietf-backoff-delay/hold-down",
                    );
                    pub const DFLT: u16 = 10000;
                }
                pub mod time_to_learn {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/spf/ietf-backoff-delay/time-to-learn",
                    );
                    pub const DFLT: u16 = 500;
                }
            }
            pub mod minimum_interval {
                pub mod level_1 {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/spf/minimum-interval/level-1",
                    );
                    pub const DFLT: u16 = 1;
                }
                pub mod level_2 {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/spf/minimum-interval/level-2",
                    );
                    pub const DFLT: u16 = 1;
                }
            }
        }
        pub mod area_password {
            use isisd_yang::YangPath;

            pub const PATH: YangPath =
                YangPath::new("/frr-isisd:isis/instance/area-password");

            pub mod password {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/area-password/password",
                );
            }
            pub mod password_type {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/area-password/password-type",
                );
                pub const DFLT: &str = "clear-text";
            }
            pub mod authenticate_snp {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/area-password/authenticate-snp",
                );
                pub const DFLT: &str = "none";
            }
        }
        pub mod domain_password {
            use isisd_yang::YangPath;

            pub const PATH: YangPath =
                YangPath::new("/frr-isisd:isis/instance/domain-password");

            pub mod password {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/domain-password/password",
                );
            }
            pub mod password_type {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/domain-password/password-type",
                );
                pub const DFLT: &str = "clear-text";
            }
            pub mod authenticate_snp {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/domain-password/authenticate-snp",
                );
                pub const DFLT: &str = "none";
            }
        }
        pub mod default_information_originate {
            pub mod ipv4 {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/default-information-originate/ipv4",
                );

                pub mod always {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/default-information-originate/ipv4/always",
                    );
                }
                pub mod route_map {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/default-information-originate/ipv4/route-map",
                    );
                }
                pub mod metric {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/default-information-originate/ipv4/metric",
                    );
                }
            }
            pub mod ipv6 {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/default-information-originate/ipv6",
                );

                pub mod always {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/default-information-originate/ipv6/always",
                    );
                }
                pub mod route_map {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/default-information-originate/ipv6/route-map",
                    );
                }
                pub mod metric {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/default-information-originate/ipv6/metric",
                    );
                }
            }
        }
        pub mod redistribute {
            pub mod ipv4 {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/redistribute/ipv4",
                );

                pub mod route_map {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/redistribute/ipv4/route-map",
                    );
                }
                pub mod metric {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/redistribute/ipv4/metric",
                    );
                }
            }
            pub mod ipv6 {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/redistribute/ipv6",
                );

                pub mod route_map {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/redistribute/ipv6/route-map",
                    );
                }
                pub mod metric {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/redistribute/ipv6/metric",
                    );
                }
            }
        }
        pub mod multi_topology {
            pub mod ipv4_multicast {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/multi-topology/ipv4-multicast",
                );

                pub mod overload {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/multi-topology/ipv4-multicast/overload",
                    );
                }
            }
            pub mod ipv4_management {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/multi-topology/ipv4-management",
                );

                pub mod overload {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/multi-topology/ipv4-management/overload",
                    );
                }
            }
            pub mod ipv6_unicast {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/multi-topology/ipv6-unicast",
                );

                pub mod overload {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/multi-topology/ipv6-unicast/overload",
                    );
                }
            }
            pub mod ipv6_multicast {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/multi-topology/ipv6-multicast",
                );

                pub mod overload {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/multi-topology/ipv6-multicast/overload",
                    );
                }
            }
            pub mod ipv6_management {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/multi-topology/ipv6-management",
                );

                pub mod overload {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/multi-topology/ipv6-management/overload",
                    );
                }
            }
            pub mod ipv6_dstsrc {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-isisd:isis/instance/multi-topology/ipv6-dstsrc",
                );

                pub mod overload {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-isisd:isis/instance/multi-topology/ipv6-dstsrc/overload",
                    );
                }
            }
        }
        pub mod log_adjacency_changes {
            use isisd_yang::YangPath;

            pub const PATH: YangPath =
                YangPath::new("/frr-isisd:isis/instance/log-adjacency-changes");
        }
    }
    pub mod mpls_te {
        use isisd_yang::YangPath;

        pub const PATH: YangPath = YangPath::new("/frr-isisd:isis/mpls-te");

        pub mod router_address {
            use isisd_yang::YangPath;

            pub const PATH: YangPath =
                YangPath::new("/frr-isisd:isis/mpls-te/router-address");
        }
    }
}

pub mod interface {
    use isisd_yang::YangPath;

    pub const PATH: YangPath = YangPath::new("/frr-interface:lib/interface");

    pub mod isis {
        use isisd_yang::YangPath;

        pub const PATH: YangPath =
            YangPath::new("/frr-interface:lib/interface/frr-isisd:isis");

        pub mod area_tag {
            use isisd_yang::YangPath;

            pub const PATH: YangPath = YangPath::new(
                "/frr-interface:lib/interface/frr-isisd:isis/area-tag",
            );
        }
        pub mod circuit_type {
            use isisd_yang::YangPath;

            pub const PATH: YangPath = YangPath::new(
                "/frr-interface:lib/interface/frr-isisd:isis/circuit-type",
            );
            pub const DFLT: &str = "level-1-2";
        }
        pub mod ipv4_routing {
            use isisd_yang::YangPath;

            pub const PATH: YangPath = YangPath::new(
                "/frr-interface:lib/interface/frr-isisd:isis/ipv4-routing",
            );
        }
        pub mod ipv6_routing {
            use isisd_yang::YangPath;

            pub const PATH: YangPath = YangPath::new(
                "/frr-interface:lib/interface/frr-isisd:isis/ipv6-routing",
            );
        }
        pub mod csnp_interval {
            pub mod level_1 {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/csnp-interval/level-1",
                );
                pub const DFLT: u16 = 10;
            }
            pub mod level_2 {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/csnp-interval/level-2",
                );
                pub const DFLT: u16 = 10;
            }
        }
        pub mod psnp_interval {
            pub mod level_1 {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/psnp-interval/level-1",
                );
                pub const DFLT: u16 = 2;
            }
            pub mod level_2 {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/psnp-interval/level-2",
                );
                pub const DFLT: u16 = 2;
            }
        }
        pub mod hello {
            pub mod padding {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/hello/padding",
                );
                pub const DFLT: bool = true;
            }
            pub mod interval {
                pub mod level_1 {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-interface:lib/interface/frr-isisd:isis/hello/interval/level-1",
                    );
                    pub const DFLT: u32 = 3;
                }
                pub mod level_2 {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-interface:lib/interface/frr-isisd:isis/hello/interval/level-2",
                    );
                    pub const DFLT: u32 = 3;
                }
            }
            pub mod multiplier {
                pub mod level_1 {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-interface:lib/interface/frr-isisd:isis/hello/multiplier/level-1",
                    );
                    pub const DFLT: u16 = 10;
                }
                pub mod level_2 {
                    use isisd_yang::YangPath;

                    pub const PATH: YangPath = YangPath::new(
                        "/frr-interface:lib/interface/frr-isisd:isis/hello/multiplier/level-2",
                    );
                    pub const DFLT: u16 = 10;
                }
            }
        }
        pub mod metric {
            pub mod level_1 {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/metric/level-1",
                );
                pub const DFLT: u32 = 10;
            }
            pub mod level_2 {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/metric/level-2",
                );
                pub const DFLT: u32 = 10;
            }
        }
        pub mod priority {
            pub mod level_1 {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/priority/level-1",
                );
                pub const DFLT: u8 = 64;
            }
            pub mod level_2 {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/priority/level-2",
                );
                pub const DFLT: u8 = 64;
            }
        }
        pub mod network_type {
            use isisd_yang::YangPath;

            pub const PATH: YangPath = YangPath::new(
                "/frr-interface:lib/interface/frr-isisd:isis/network-type",
            );
        }
        pub mod passive {
            use isisd_yang::YangPath;

            pub const PATH: YangPath = YangPath::new(
                "/frr-interface:lib/interface/frr-isisd:isis/passive",
            );
        }
        pub mod password {
            use isisd_yang::YangPath;

            pub const PATH: YangPath = YangPath::new(
                "/frr-interface:lib/interface/frr-isisd:isis/password",
            );

            pub mod password {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/password/password",
                );
            }
            pub mod password_type {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/password/password-type",
                );
                pub const DFLT: &str = "clear-text";
            }
        }
        pub mod disable_three_way_handshake {
            use isisd_yang::YangPath;

            pub const PATH: YangPath = YangPath::new(
                "/frr-interface:lib/interface/frr-isisd:isis/disable-three-way-handshake",
            );
        }
        pub mod multi_topology {
            pub mod ipv4_unicast {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv4-unicast",
                );
                pub const DFLT: bool = true;
            }
            pub mod ipv4_multicast {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv4-multicast",
                );
                pub const DFLT: bool = true;
            }
            pub mod ipv4_management {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv4-management",
                );
                pub const DFLT: bool = false;
            }
            pub mod ipv6_unicast {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv6-unicast",
                );
                pub const DFLT: bool = true;
            }
            pub mod ipv6_multicast {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv6-multicast",
                );
                pub const DFLT: bool = true;
            }
            pub mod ipv6_management {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv6-management",
                );
                pub const DFLT: bool = false;
            }
            pub mod ipv6_dstsrc {
                use isisd_yang::YangPath;

                pub const PATH: YangPath = YangPath::new(
                    "/frr-interface:lib/interface/frr-isisd:isis/multi-topology/ipv6-dstsrc",
                );
                pub const DFLT: bool = false;
            }
        }
    }
}
