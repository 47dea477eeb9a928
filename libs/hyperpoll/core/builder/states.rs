//! Compile-time progress of a `PollerBuilder`
//!
//! `build()` only exists once both a fetcher and a state handler were given,
//! so a poller without a data source or a sink cannot be constructed.

use std::marker::PhantomData;

/// Whether the builder has a `Fetcher` yet
pub trait FetcherState {}

pub struct NoFetcher;
impl FetcherState for NoFetcher {}

/// `fetcher()` was called
pub struct HasFetcher;
impl FetcherState for HasFetcher {}

/// Whether the builder has a state handler yet
pub trait HandlerState {}

pub struct NoHandler;
impl HandlerState for NoHandler {}

/// `state()` was called
pub struct HasHandler;
impl HandlerState for HasHandler {}

/// Zero-sized carrier of the fetcher and handler markers
#[derive(Debug, Clone, Copy)]
pub struct TypeState<Fs, Hs> {
    _fetcher: PhantomData<Fs>,
    _handler: PhantomData<Hs>,
}

impl<Fs, Hs> TypeState<Fs, Hs> {
    pub(crate) fn new() -> Self {
        Self {
            _fetcher: PhantomData,
            _handler: PhantomData,
        }
    }
}

impl<Fs, Hs> Default for TypeState<Fs, Hs> {
    fn default() -> Self {
        Self::new()
    }
}
