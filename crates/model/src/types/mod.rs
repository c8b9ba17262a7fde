// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2024-2026 Moneta contributors. All rights reserved.
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Value types for the monetary domain model, including `Money`, `Currency`,
//! and `MoneyContext`.
//!
//! All types in this module are immutable `Copy` value objects: every
//! operation yields a new value, and instances are safely shared across
//! threads without locking.

pub mod builder;
pub mod context;
pub mod currency;
pub mod money;
pub mod split;

pub use builder::CurrencyBuilder;
pub use context::{MoneyContext, MoneyContextBuilder};
pub use currency::Currency;
pub use money::{MULTIPLICATIVE_IDENTITY, Money};
