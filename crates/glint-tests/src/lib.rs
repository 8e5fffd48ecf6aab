//! Integration tests for glint-rs crates.
//!
//! This crate contains cross-type tests that verify the interaction
//! between the vector, matrix and quaternion representations: conversion
//! round-trips, algebraic identities and the flat-buffer GPU interop
//! contract.
