// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Rubber-band zoom for 3D/2D scene viewers.
//!
//! The user drags a rectangle over the rendered view; while dragging, an
//! XOR outline is drawn into a copy of a captured framebuffer snapshot so the
//! scene is never re-rendered per pointer move. On release the camera is
//! moved so that the rectangle fills the viewport, using a zoom or dolly for
//! the traditional path and a view-angle change for perspective cameras that
//! should stay in place.
//!
//! # Key entry points
//!
//! - [`zoom::RubberBandZoom`] - the drag state machine (press / move /
//!   release / cancel) and its event dispatcher
//! - [`geometry::adjust_box`] - aspect-lock and center-at-start adjustment
//! - [`overlay`] - pixel snapshots and the XOR rectangle overlay
//! - [`options::Options`] - TOML-backed zoom policy and camera defaults
//!
//! # Collaborators
//!
//! The render window, renderer viewports and cameras are consumed through
//! the [`surface::RenderSurface`], [`viewport::Scene`],
//! [`viewport::Viewport`] and [`camera::Camera`] traits. Reference
//! implementations ([`surface::SoftwareSurface`],
//! [`viewport::SceneViewport`], [`camera::SceneCamera`]) are provided for
//! headless use and testing.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod overlay;
pub mod surface;
pub mod viewport;
pub mod zoom;

pub use error::RubberBandError;
pub use zoom::{ReleaseOutcome, RubberBandZoom, ZoomMode};
