use crate::config::ApiConfig;
use crate::error::ConfigError;
use crate::util::text::join_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    Backend,
    ReviewNotice,
}

impl Upstream {
    pub fn base<'a>(&self, api: &'a ApiConfig) -> &'a str {
        match self {
            Self::Backend => api.backend_base.as_str(),
            Self::ReviewNotice => api.review_notice_base.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyRoute {
    pub prefix: &'static str,
    pub upstream: Upstream,
    pub strip_prefix: bool,
}

pub const PROXY_ROUTES: &[ProxyRoute] = &[
    ProxyRoute {
        prefix: "/api",
        upstream: Upstream::Backend,
        strip_prefix: true,
    },
    ProxyRoute {
        prefix: "/task",
        upstream: Upstream::ReviewNotice,
        strip_prefix: false,
    },
];

pub fn match_route(path: &str) -> Option<(&'static ProxyRoute, &str)> {
    PROXY_ROUTES.iter().find_map(|route| {
        let rest = path.strip_prefix(route.prefix)?;
        if rest.is_empty() || rest.starts_with('/') {
            Some((route, rest))
        } else {
            None
        }
    })
}

pub fn resolve(api: &ApiConfig, path: &str) -> Result<String, ConfigError> {
    let (route, rest) = match_route(path).ok_or_else(|| ConfigError::Unrouted(path.to_string()))?;
    let target = if route.strip_prefix { rest } else { path };
    Ok(join_url(route.upstream.base(api), target))
}
