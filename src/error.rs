// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Error represents the various errors which can come up while declaring or
/// parsing command-line arguments.
#[derive(Debug, Error)]
pub enum Error {
    /// A formatting error, encountered while rendering help output.
    #[error("{0}")]
    Fmt(#[from] std::fmt::Error),
    /// Errors akin to EINVAL - essentially, an argument passed into a function
    /// was invalid in some way..
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// An I/O error, generally encountered when writing to an output stream.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A required argument still had no value after all of the command-line
    /// parameters were scanned.
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),
}

/// A Result type which uses cmdargs' internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
