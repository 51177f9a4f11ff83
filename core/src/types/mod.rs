// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod bigint;
mod bigrat;
mod field;
mod surd;

pub use bigint::{BigInt, BigIntError};
pub use bigrat::BigRat;
pub use field::Field;
pub use surd::Surd;
