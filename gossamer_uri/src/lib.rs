pub mod scheme;
pub mod host;
pub mod authority;
pub mod path;
pub mod query;
pub mod fragment;
pub mod uri;
pub mod reference;

pub mod template;

pub use scheme::Scheme;
pub use host::{Host, RegName};
pub use authority::{Authority, Port, UserInfo};
pub use path::{PathAbsolute, PathAbsoluteOrEmpty, PathNoScheme, PathRootless};
pub use query::Query;
pub use fragment::Fragment;
pub use uri::{AbsoluteUri, HierarchyPart, Uri};
pub use reference::{RelativePart, RelativeReference, UriReference};
pub use template::{UriTemplate, UriTemplateData};
