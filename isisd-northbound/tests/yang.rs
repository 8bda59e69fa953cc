//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use isisd_northbound::yang::{interface, isis};
use isisd_yang::YangPath;
use isisd_yang::schema;

fn assert_default(path: YangPath, dflt: impl ToString) {
    let snode = schema::find(path.as_str()).unwrap();
    assert_eq!(snode.default, Some(dflt.to_string().as_str()), "{path}");
}

#[test]
fn paths_exist() {
    for path in [
        isis::instance::PATH,
        isis::instance::area_address::PATH,
        isis::instance::area_password::PATH,
        isis::instance::domain_password::authenticate_snp::PATH,
        isis::instance::redistribute::ipv6::metric::PATH,
        isis::instance::multi_topology::ipv6_dstsrc::overload::PATH,
        isis::mpls_te::router_address::PATH,
        interface::isis::PATH,
        interface::isis::password::password_type::PATH,
        interface::isis::disable_three_way_handshake::PATH,
    ] {
        assert!(schema::find(path.as_str()).is_some(), "{path}");
    }
}

#[test]
fn defaults() {
    assert_default(isis::instance::is_type::PATH, isis::instance::is_type::DFLT);
    assert_default(
        isis::instance::metric_style::PATH,
        isis::instance::metric_style::DFLT,
    );
    assert_default(
        isis::instance::lsp::mtu::PATH,
        isis::instance::lsp::mtu::DFLT,
    );
    assert_default(
        isis::instance::lsp::refresh_interval::level_2::PATH,
        isis::instance::lsp::refresh_interval::level_2::DFLT,
    );
    assert_default(
        isis::instance::spf::ietf_backoff_delay::hold_down::PATH,
        isis::instance::spf::ietf_backoff_delay::hold_down::DFLT,
    );
    assert_default(
        interface::isis::hello::interval::level_1::PATH,
        interface::isis::hello::interval::level_1::DFLT,
    );
    assert_default(
        interface::isis::priority::level_2::PATH,
        interface::isis::priority::level_2::DFLT,
    );
    assert_default(
        interface::isis::multi_topology::ipv6_dstsrc::PATH,
        interface::isis::multi_topology::ipv6_dstsrc::DFLT,
    );
}
