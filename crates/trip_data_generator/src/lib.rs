/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

//! Deterministic synthetic ride data and grid mapping over a fixed region.
//!
//! Every ride field is a pure function of its [`common::types::RideId`], and
//! coordinates map reproducibly onto the cell lattice in [`common::grid`].

pub mod common;
pub mod tools;

pub use common::generator::RideGenerator;
pub use common::types::*;
