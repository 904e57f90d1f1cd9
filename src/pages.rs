// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod AboutUs;
pub mod AllClients;
pub mod Home;
pub mod ServiceDetails;
