pub mod arithmetic;
pub mod error;
pub mod linear;
pub mod matrix;
pub mod polynomial;
/// The `mathsuite_core` crate provides the computation engine behind the
/// math suite front end. It is pure calculation: callers hand in
/// already-parsed numbers and receive fresh values or typed failures,
/// never rendered output.
///
/// Key components:
/// - **Matrix**: elementary matrix algebra and determinants (closed forms
///   for small sizes, recursive cofactor expansion above them).
/// - **Polynomial**: equation rendering and closed-form roots for degrees
///   2 and 3.
/// - **Linear**: Cramer's-rule solving of 2- and 3-variable systems with
///   singularity detection.
/// - **Arithmetic**: guarded scalar calculator operations.
pub mod traits;
