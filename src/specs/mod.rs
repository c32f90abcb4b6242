// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **page-specific scraping specifications** for the academy.
//! Each spec focuses on a single page and encodes *where the ground truth lives in
//! the HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML reading** over an already-fetched `core::html::Document`
//!   (all-topics, all-labs, dashboard). No networking.
//! - **Selector choice**: every tag/class/id combination comes from
//!   `config::consts`, compiled once per spec.
//! - **Tolerant extraction**: a missing element is a `Gap` for that one item,
//!   never a failure of the whole page.
//! - The **title → section id table** (`topic_ids`) that ties the two listing pages
//!   together.
//!
//! ## What does **not** live here
//! - **Fetching / fallback** (`runner`), **persistence** (`store`), **merging**
//!   into the snapshot (`data`), **presentation** (`report`).
//!
//! ## Typical call chain
//! ```text
//! runner::update → PageSource::fetch (Session::get) → Document::parse
//!                ↘ aggregate::aggregate → specs::topics::group_cards
//!                                       → specs::labs::try_count_completed
//!                ↘ specs::dashboard::parse_levels
//! ```
//!
//! ## Testing notes
//! - Specs are tested **offline** against inline HTML fixtures.
//! - Membership in a section is decided by document position, so fixtures may nest
//!   or flatten markup freely.
pub mod dashboard;
pub mod labs;
pub mod topic_ids;
pub mod topics;
