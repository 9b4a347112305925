use std::convert::Infallible;

pub enum TriStr<'a> {
    Shared(&'a str),
    Owned(String),
    Static(&'static str),
}

/// Sink for `name=value` query parameters, in the order they are written.
pub trait UrlParamWriter {
    type E;
    fn add(&mut self, name: TriStr<'_>, value: TriStr<'_>) -> Result<(), Self::E>;
    fn fork<'a>(&'a mut self, name: TriStr<'a>) -> BufferedName<'a, Self> {
        BufferedName { s: self, name }
    }
}

pub trait WriteUrlParams {
    fn ser<W: UrlParamWriter>(&self, w: &mut W) -> Result<(), W::E>;
}

pub trait WriteUrlValue {
    fn ser<W: UrlParamWriter>(&self, w: BufferedName<'_, W>) -> Result<(), W::E>;
    /// only write the extra values, excluding names.
    fn ser_additional_only<W: UrlParamWriter>(&self, _w: &mut W) -> Result<(), W::E> {
        Ok(())
    }
}

pub struct BufferedName<'a, T: ?Sized> {
    s: &'a mut T,
    name: TriStr<'a>,
}

impl<'a, T: UrlParamWriter> BufferedName<'a, T> {
    pub fn write(self, value: TriStr<'_>) -> Result<&'a mut T, T::E> {
        self.s.add(self.name, value)?;
        Ok(self.s)
    }
}

pub trait NamedEnum {
    fn variant_name(&self) -> &'static str;
}

/// Percent-encoded query string, ready for [`Url::set_query`](::url::Url::set_query).
#[derive(Default)]
pub struct Simple(pub String);

impl UrlParamWriter for Simple {
    type E = Infallible;
    fn add(&mut self, name: TriStr<'_>, value: TriStr<'_>) -> Result<(), Self::E> {
        if !self.0.is_empty() {
            self.0.push('&');
        }
        self.0.push_str(&urlencoding::encode(&name));
        self.0.push('=');
        self.0.push_str(&urlencoding::encode(&value));
        Ok(())
    }
}

/// Plain ordered pairs, without any encoding applied.
impl UrlParamWriter for Vec<(String, String)> {
    type E = Infallible;
    fn add(&mut self, name: TriStr<'_>, value: TriStr<'_>) -> Result<(), Self::E> {
        self.push((name.into(), value.into()));
        Ok(())
    }
}

impl WriteUrlValue for String {
    fn ser<W: UrlParamWriter>(&self, w: BufferedName<'_, W>) -> Result<(), W::E> {
        w.write(TriStr::Shared(self)).map(|_| ())
    }
}

impl<T: WriteUrlValue> WriteUrlValue for Option<T> {
    fn ser<W: UrlParamWriter>(&self, w: BufferedName<'_, W>) -> Result<(), W::E> {
        if let Some(this) = self {
            this.ser(w)?;
        }
        Ok(())
    }
}

impl<T: WriteUrlParams> WriteUrlParams for Option<T> {
    fn ser<W: UrlParamWriter>(&self, w: &mut W) -> Result<(), W::E> {
        if let Some(this) = self {
            this.ser(w)?;
        }
        Ok(())
    }
}

impl<T: WriteUrlValue + NamedEnum> WriteUrlValue for Vec<T> {
    fn ser<W: UrlParamWriter>(&self, w: BufferedName<'_, W>) -> Result<(), W::E> {
        if self.is_empty() {
            return Ok(());
        }
        let s = crate::req::encode_multivalue(self);
        let w = w.write(TriStr::Owned(s))?;
        self.ser_additional_only(w)
    }

    fn ser_additional_only<W: UrlParamWriter>(&self, w: &mut W) -> Result<(), W::E> {
        for v in self {
            v.ser_additional_only(w)?;
        }
        Ok(())
    }
}

pub struct PrependAdaptor<'a, T> {
    inner: T,
    prep: &'a str,
}

impl<T: UrlParamWriter> UrlParamWriter for PrependAdaptor<'_, T> {
    type E = T::E;
    fn add(&mut self, name: TriStr<'_>, value: TriStr<'_>) -> Result<(), Self::E> {
        let p = self.prep;
        self.inner.add(format!("{p}{name}").into(), value)
    }
}

impl<'a, T> PrependAdaptor<'a, T> {
    pub fn new(inner: T, prep: &'a str) -> Self {
        PrependAdaptor { inner, prep }
    }
}
