// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors raised by the math core.

use thiserror::Error;

/// A failure caused by degenerate numeric input.
///
/// Every variant is a deterministic function of the arguments: calling again
/// with the same input fails the same way, so there is nothing to retry. The
/// caller decides whether to skip the geometry, substitute a default, or abort.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// A direction was requested from a vector with zero (or non-finite) length.
    #[error("cannot derive a direction from a zero-length vector")]
    DegenerateVector,
    /// The matrix has no inverse.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// The determinant that was found to be negligible.
        determinant: f32,
    },
    /// A homogeneous divide was attempted with `w == 0`.
    #[error("transformed point lies at infinity (w = 0)")]
    PointAtInfinity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            MathError::DegenerateVector.to_string(),
            "cannot derive a direction from a zero-length vector"
        );
        assert_eq!(
            MathError::SingularMatrix { determinant: 0.0 }.to_string(),
            "matrix is singular (determinant 0)"
        );
    }
}
