// ABOUTME: Output formatting for consultation plans
// ABOUTME: Line-oriented plan text, display block parsing and HTML rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Formatting Layer
//!
//! The plan generator and the renderer share a small line convention:
//!
//! - `#`, `##`, `###` prefixed lines are headings
//! - `- ` prefixed lines are list items; `**Label:**` lines also render as list items
//! - empty lines separate groups
//! - anything else is a paragraph
//!
//! [`plan_text::PlanWriter`] produces that text, [`renderer::parse_document`]
//! turns it into [`renderer::DisplayBlock`]s and [`html`] renders blocks and
//! the intake form as HTML pages.

/// HTML pages for the intake form and consultation results
pub mod html;
/// Plan text builder
pub mod plan_text;
/// Line-oriented plan text parser
pub mod renderer;

pub use plan_text::PlanWriter;
pub use renderer::{parse_document, DisplayBlock};
