//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

use std::borrow::Cow;

use isisd_yang::{ToYang, TryFromYang};
use smallvec::SmallVec;

use crate::address::{AreaAddr, Net, SystemId};
use crate::auth::{PasswdMethod, SnpAuthFlags};
use crate::circuit::fsm;
use crate::levels::LevelType;
use crate::northbound::REGEX_NET;
use crate::northbound::configuration::{MetricStyle, NetworkType};

// Maximum length of the textual representation of a NET.
const NET_MAX_STR_LEN: usize = 50;

// ===== ToYang implementations =====

impl ToYang for LevelType {
    fn to_yang(&self) -> Cow<'static, str> {
        match self {
            LevelType::L1 => "level-1".into(),
            LevelType::L2 => "level-2-only".into(),
            LevelType::All => "level-1-2".into(),
        }
    }
}

impl ToYang for SystemId {
    fn to_yang(&self) -> Cow<'static, str> {
        let bytes = self.as_ref();
        Cow::Owned(format!(
            "{:02X}{:02X}.{:02X}{:02X}.{:02X}{:02X}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
        ))
    }
}

impl ToYang for AreaAddr {
    fn to_yang(&self) -> Cow<'static, str> {
        dotted(self.as_ref()).into()
    }
}

impl ToYang for Net {
    fn to_yang(&self) -> Cow<'static, str> {
        dotted(self.as_ref()).into()
    }
}

impl ToYang for fsm::State {
    fn to_yang(&self) -> Cow<'static, str> {
        match self {
            fsm::State::Init => "init".into(),
            fsm::State::Conf => "conf".into(),
            fsm::State::Up => "up".into(),
        }
    }
}

// ===== TryFromYang implementations =====

impl TryFromYang for LevelType {
    fn try_from_yang(value: &str) -> Option<LevelType> {
        match value {
            "level-1" => Some(LevelType::L1),
            "level-2-only" => Some(LevelType::L2),
            "level-1-2" => Some(LevelType::All),
            _ => None,
        }
    }
}

impl TryFromYang for Net {
    fn try_from_yang(value: &str) -> Option<Net> {
        if value.len() > NET_MAX_STR_LEN || !REGEX_NET.is_match(value) {
            return None;
        }

        // Remove the dots and convert the hex string into a vector of bytes.
        let net = value.replace('.', "");
        let bytes = (0..net.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&net[i..i + 2], 16).ok())
            .collect::<Option<SmallVec<[u8; 20]>>>()?;
        if bytes.len() < Net::MIN_LEN || bytes.len() > Net::MAX_LEN {
            return None;
        }

        Some(Net::new(bytes))
    }
}

impl TryFromYang for MetricStyle {
    fn try_from_yang(value: &str) -> Option<MetricStyle> {
        match value {
            "narrow" => Some(MetricStyle::Narrow),
            "transition" => Some(MetricStyle::Transition),
            "wide" => Some(MetricStyle::Wide),
            _ => None,
        }
    }
}

impl TryFromYang for PasswdMethod {
    fn try_from_yang(value: &str) -> Option<PasswdMethod> {
        match value {
            "clear-text" => Some(PasswdMethod::Cleartext),
            "md5" => Some(PasswdMethod::HmacMd5),
            _ => None,
        }
    }
}

impl TryFromYang for SnpAuthFlags {
    fn try_from_yang(value: &str) -> Option<SnpAuthFlags> {
        match value {
            "none" => Some(SnpAuthFlags::empty()),
            "send-only" => Some(SnpAuthFlags::SEND),
            "validate" => Some(SnpAuthFlags::SEND | SnpAuthFlags::VALIDATE),
            _ => None,
        }
    }
}

impl TryFromYang for NetworkType {
    fn try_from_yang(value: &str) -> Option<NetworkType> {
        match value {
            "broadcast" => Some(NetworkType::Broadcast),
            "point-to-point" => Some(NetworkType::PointToPoint),
            _ => None,
        }
    }
}

// ===== helper functions =====

// Formats an OSI address: the first byte, followed by groups of two bytes.
fn dotted(bytes: &[u8]) -> String {
    let mut groups = vec![];
    if let Some((first, rest)) = bytes.split_first() {
        groups.push(format!("{first:02X}"));
        groups.extend(rest.chunks(2).map(|chunk| {
            chunk.iter().map(|byte| format!("{byte:02X}")).collect::<String>()
        }));
    }
    groups.join(".")
}

// ===== unit tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net() {
        let net = Net::try_from_yang("49.0001.1921.6800.1001.00").unwrap();
        assert_eq!(net.area_addr().to_yang(), "49.0001");
        assert_eq!(net.system_id().to_yang(), "1921.6800.1001");
        assert_eq!(net.nsel(), 0);
        assert_eq!(net.to_yang(), "49.0001.1921.6800.1001.00");

        // Shortest NET: a single area byte.
        let net = Net::try_from_yang("49.1921.6800.1001.00").unwrap();
        assert_eq!(net.area_addr().as_ref(), &[0x49]);
    }

    #[test]
    fn test_net_invalid() {
        for value in [
            "",
            "49",
            "1921.6800.1001.00",
            "490001.1921.6800.1001.00",
            "49.0001.1921.6800.1001.0",
            "49.0001.1921.6800.1001.zz",
            "49.0001.0002.0003.0004.0005.0006.0007.1921.6800.1001.00",
        ] {
            assert_eq!(Net::try_from_yang(value), None, "{value}");
        }
    }

    #[test]
    fn test_snp_auth() {
        assert_eq!(
            SnpAuthFlags::try_from_yang("validate"),
            Some(SnpAuthFlags::SEND | SnpAuthFlags::VALIDATE)
        );
        assert_eq!(
            SnpAuthFlags::try_from_yang("none"),
            Some(SnpAuthFlags::empty())
        );
    }
}
