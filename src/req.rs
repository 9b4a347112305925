//! Request shapes for the `action=query` calls made by the resolvers.

use std::num::NonZeroU32;

use crate::url::{
    BufferedName, NamedEnum, PrependAdaptor, TriStr, UrlParamWriter, WriteUrlParams, WriteUrlValue,
};

/// Joins enum values with `|`, the MediaWiki multi-value separator.
#[must_use]
pub fn encode_multivalue<'a, T: NamedEnum + 'a, V: IntoIterator<Item = &'a T>>(values: V) -> String {
    let mut s = String::new();
    for (i, item) in values.into_iter().enumerate() {
        if i != 0 {
            s.push('|');
        }
        s.push_str(item.variant_name());
    }
    s
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Main {
    pub query: Query,
    pub format: Format,
}

impl Main {
    pub fn query(query: Query) -> Self {
        Self {
            query,
            format: Format::Json,
        }
    }

    /// Page info with the full URL and the disambiguation page property.
    pub fn page_info(spec: PageSpec) -> Self {
        Self::query(Query {
            prop: vec![
                QueryProp::Info(PropInfo {
                    prop: vec![InProp::Url],
                }),
                QueryProp::PageProps(PropPageProps {
                    prop: vec![PageProp::Disambiguation],
                }),
            ],
            spec: Some(spec),
            ..Default::default()
        })
    }

    /// Raw body of the latest revision, used to list disambiguation targets.
    pub fn disambiguation_content(title: impl Into<String>) -> Self {
        Self::query(Query {
            prop: vec![QueryProp::Revisions(PropRevisions {
                prop: vec![RvProp::Content],
                limit: NonZeroU32::new(1),
            })],
            spec: Some(PageSpec::Title(title.into())),
            ..Default::default()
        })
    }

    pub fn page_content(title: impl Into<String>) -> Self {
        Self::query(Query {
            prop: vec![
                QueryProp::Extracts,
                QueryProp::Revisions(PropRevisions {
                    prop: vec![RvProp::Ids],
                    limit: None,
                }),
            ],
            spec: Some(PageSpec::Title(title.into())),
            ..Default::default()
        })
    }

    pub fn search(search: impl Into<String>, limit: u32) -> Self {
        Self::query(Query {
            list: Some(ListSearch {
                search: search.into(),
                limit,
            }),
            ..Default::default()
        })
    }

    /// The parameters in the order they are sent, not percent-encoded.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Err(e) = self.ser(&mut pairs) {
            match e {}
        }
        pairs
    }
}

impl WriteUrlParams for Main {
    fn ser<W: UrlParamWriter>(&self, w: &mut W) -> Result<(), W::E> {
        w.add(TriStr::Static("action"), TriStr::Static("query"))?;
        self.query.ser(w)?;
        self.format.ser(w.fork(TriStr::Static("format")))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    /// Which properties to get for the queried pages.
    pub prop: Vec<QueryProp>,
    pub list: Option<ListSearch>,
    pub spec: Option<PageSpec>,
}

impl WriteUrlParams for Query {
    fn ser<W: UrlParamWriter>(&self, w: &mut W) -> Result<(), W::E> {
        self.prop.ser(w.fork(TriStr::Static("prop")))?;
        if let Some(list) = &self.list {
            w.add(TriStr::Static("list"), TriStr::Static("search"))?;
            list.ser(w)?;
        }
        WriteUrlParams::ser(&self.spec, w)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryProp {
    Info(PropInfo),
    PageProps(PropPageProps),
    Revisions(PropRevisions),
    Extracts,
}

impl NamedEnum for QueryProp {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Info(_) => "info",
            Self::PageProps(_) => "pageprops",
            Self::Revisions(_) => "revisions",
            Self::Extracts => "extracts",
        }
    }
}

impl WriteUrlValue for QueryProp {
    fn ser<W: UrlParamWriter>(&self, w: BufferedName<'_, W>) -> Result<(), W::E> {
        let w = w.write(TriStr::Static(self.variant_name()))?;
        self.ser_additional_only(w)
    }

    fn ser_additional_only<W: UrlParamWriter>(&self, w: &mut W) -> Result<(), W::E> {
        match self {
            Self::Info(info) => info.ser(&mut PrependAdaptor::new(w, "in")),
            Self::PageProps(props) => props.ser(&mut PrependAdaptor::new(w, "pp")),
            Self::Revisions(revs) => revs.ser(&mut PrependAdaptor::new(w, "rv")),
            Self::Extracts => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropInfo {
    pub prop: Vec<InProp>,
}

impl WriteUrlParams for PropInfo {
    fn ser<W: UrlParamWriter>(&self, w: &mut W) -> Result<(), W::E> {
        self.prop.ser(w.fork(TriStr::Static("prop")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InProp {
    Url,
}

impl NamedEnum for InProp {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Url => "url",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropPageProps {
    pub prop: Vec<PageProp>,
}

impl WriteUrlParams for PropPageProps {
    fn ser<W: UrlParamWriter>(&self, w: &mut W) -> Result<(), W::E> {
        self.prop.ser(w.fork(TriStr::Static("prop")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageProp {
    Disambiguation,
}

impl NamedEnum for PageProp {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Disambiguation => "disambiguation",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropRevisions {
    pub prop: Vec<RvProp>,
    pub limit: Option<NonZeroU32>,
}

impl WriteUrlParams for PropRevisions {
    fn ser<W: UrlParamWriter>(&self, w: &mut W) -> Result<(), W::E> {
        self.prop.ser(w.fork(TriStr::Static("prop")))?;
        WriteUrlValue::ser(&self.limit, w.fork(TriStr::Static("limit")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RvProp {
    Content,
    Ids,
}

impl NamedEnum for RvProp {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Ids => "ids",
        }
    }
}

/// `list=search`. The limit is sent both as `srlimit` and as a bare `limit`,
/// since which one is honoured depends on the endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListSearch {
    pub search: String,
    pub limit: u32,
}

impl WriteUrlParams for ListSearch {
    fn ser<W: UrlParamWriter>(&self, w: &mut W) -> Result<(), W::E> {
        {
            let mut sr = PrependAdaptor::new(&mut *w, "sr");
            self.search.ser(sr.fork(TriStr::Static("search")))?;
            self.limit.ser(sr.fork(TriStr::Static("limit")))?;
        }
        self.limit.ser(w.fork(TriStr::Static("limit")))
    }
}

/// Selects a page either by its id or by its title.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PageSpec {
    Id(u64),
    Title(String),
}

impl WriteUrlParams for PageSpec {
    fn ser<W: UrlParamWriter>(&self, w: &mut W) -> Result<(), W::E> {
        match self {
            Self::Id(id) => id.ser(w.fork(TriStr::Static("pageids"))),
            Self::Title(title) => title.ser(w.fork(TriStr::Static("titles"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
}

impl NamedEnum for Format {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Json => "json",
        }
    }
}
