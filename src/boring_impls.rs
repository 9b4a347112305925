//! This is really boring. Move on.

use std::fmt;
use std::num::NonZeroU32;
use std::ops::Deref;

use crate::req::{Format, InProp, PageProp, PageSpec, RvProp};
use crate::types::MwTimestamp;
use crate::url::{BufferedName, NamedEnum, TriStr, UrlParamWriter, WriteUrlValue};

impl Deref for TriStr<'_> {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Owned(s) => s,
            Self::Static(s) => s,
            Self::Shared(s) => s,
        }
    }
}

impl From<TriStr<'_>> for String {
    fn from(s: TriStr<'_>) -> Self {
        match s {
            TriStr::Owned(s) => s,
            TriStr::Shared(s) => s.to_owned(),
            TriStr::Static(s) => s.to_owned(),
        }
    }
}

impl fmt::Display for TriStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt(f)
    }
}

impl From<String> for TriStr<'_> {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl<'w, T: UrlParamWriter> UrlParamWriter for &'w mut T {
    type E = T::E;
    fn add(&mut self, name: TriStr<'_>, value: TriStr<'_>) -> Result<(), Self::E> {
        (*self).add(name, value)
    }
}

macro_rules! display_impls {
    ($($ty:ty),*$(,)?) => {$(
        impl WriteUrlValue for $ty {
            fn ser<W: UrlParamWriter>(&self, w: BufferedName<'_, W>) -> Result<(), W::E> {
                w.write(TriStr::Owned(self.to_string()))?;
                Ok(())
            }
        }
    )*};
}

display_impls! {
    u32,
    u64,
    NonZeroU32,
}

macro_rules! named_impls {
    ($($ty:ty),*$(,)?) => {$(
        impl WriteUrlValue for $ty {
            fn ser<W: UrlParamWriter>(&self, w: BufferedName<'_, W>) -> Result<(), W::E> {
                w.write(TriStr::Static(self.variant_name()))?;
                Ok(())
            }
        }
    )*};
}

named_impls! {
    InProp,
    PageProp,
    RvProp,
    Format,
}

impl From<&'_ str> for PageSpec {
    fn from(s: &'_ str) -> Self {
        Self::Title(s.to_owned())
    }
}

impl From<String> for PageSpec {
    fn from(s: String) -> Self {
        Self::Title(s)
    }
}

impl From<u64> for PageSpec {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for PageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "page id {id}"),
            Self::Title(title) => write!(f, "\"{title}\""),
        }
    }
}

impl fmt::Display for MwTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::types::format(&self.0))
    }
}
