//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//
// Sponsored by NLnet as part of the Next Generation Internet initiative.
// See: https://nlnet.nl/NGI0
//

//
// IS-IS configuration flow:
//                            +--------------+
//                            |  northbound  |
//                            +--------------+
//                                   |
//                       commit (1x) |
//                                   V
//                            +--------------+
//    iface_update (Nx) ->    |   instance   |
//                            +--------------+
//                                   |
//              protocol_output (1x) |
//                                   V
//                            +--------------+
//                            | LSDB/SPF/PDU |
//                            +--------------+
//
// Work resulting from configuration changes is handed off to the protocol
// collaborators without waiting for it to complete.
//

// IS-IS inter-task message types.
pub mod messages {
    use derive_new::new;
    use serde::{Deserialize, Serialize};

    // Type aliases.
    pub type ProtocolOutputMsg = output::ProtocolMsg;

    // Output messages (instance -> protocol collaborators).
    pub mod output {
        use super::*;
        use crate::levels::{LevelNumber, LevelType};

        #[derive(Clone, Debug, Eq, PartialEq)]
        #[derive(Deserialize, Serialize)]
        pub enum ProtocolMsg {
            LspGenerate(LspGenerateMsg),
            LspRegenerate(LspRegenerateMsg),
            CircuitUp(CircuitUpdMsg),
            CircuitDown(CircuitUpdMsg),
            AreaDestroyed(AreaDestroyedMsg),
        }

        // Request to originate the local LSP of an area for the first time.
        #[derive(Clone, Debug, Eq, PartialEq)]
        #[derive(Deserialize, Serialize, new)]
        pub struct LspGenerateMsg {
            pub area: String,
            pub level: LevelNumber,
        }

        // Request to schedule the reorigination of the local LSPs of an
        // area.
        #[derive(Clone, Debug, Eq, PartialEq)]
        #[derive(Deserialize, Serialize, new)]
        pub struct LspRegenerateMsg {
            pub area: String,
            pub level_type: LevelType,
        }

        #[derive(Clone, Debug, Eq, PartialEq)]
        #[derive(Deserialize, Serialize, new)]
        pub struct CircuitUpdMsg {
            pub area: String,
            pub ifname: String,
            pub level_type: LevelType,
        }

        // The area's LSDB, timers and SPF state must be torn down.
        #[derive(Clone, Debug, Eq, PartialEq)]
        #[derive(Deserialize, Serialize, new)]
        pub struct AreaDestroyedMsg {
            pub area: String,
        }
    }
}
