pub mod normalization;
pub mod sanitization;
pub mod sentence_splitting;
