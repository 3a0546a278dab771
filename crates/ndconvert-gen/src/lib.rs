// Copyright 2026 ndconvert developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Build arrays for tests and benchmarks
//!
//! - [`array_builder::ArrayBuilder`]: rectangular arrays of any rank
//! - [`jagged_builder::JaggedBuilder`]: uniform or ragged jagged arrays
pub mod array_builder;
pub mod jagged_builder;
