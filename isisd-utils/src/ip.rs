//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde::{Deserialize, Serialize};

// Address family identifier.
//
// IANA registry:
// http://www.iana.org/assignments/address-family-numbers
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
pub enum AddressFamily {
    Ipv4 = 1,
    Ipv6 = 2,
}

// Container for storing separate values for IPv4 and IPv6.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AddressFamilies<T> {
    pub ipv4: T,
    pub ipv6: T,
}

// ===== impl AddressFamily =====

impl AddressFamily {
    // Returns the name of the data node enabling routing for this address
    // family on a circuit.
    pub fn routing_leaf(&self) -> &'static str {
        match self {
            AddressFamily::Ipv4 => "ipv4-routing",
            AddressFamily::Ipv6 => "ipv6-routing",
        }
    }

    // Returns the other address family.
    pub fn sibling(&self) -> AddressFamily {
        match self {
            AddressFamily::Ipv4 => AddressFamily::Ipv6,
            AddressFamily::Ipv6 => AddressFamily::Ipv4,
        }
    }
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "ipv4"),
            AddressFamily::Ipv6 => write!(f, "ipv6"),
        }
    }
}

// ===== impl AddressFamilies =====

impl<T> AddressFamilies<T> {
    pub fn get(&self, af: AddressFamily) -> &T {
        match af {
            AddressFamily::Ipv4 => &self.ipv4,
            AddressFamily::Ipv6 => &self.ipv6,
        }
    }

    pub fn get_mut(&mut self, af: AddressFamily) -> &mut T {
        match af {
            AddressFamily::Ipv4 => &mut self.ipv4,
            AddressFamily::Ipv6 => &mut self.ipv6,
        }
    }
}
