//! Option 121: classless static routes (RFC 3442).

use crate::config::CLASSLESS_ROUTES_PREFIX;
use crate::error::Result;
use crate::models::ClasslessRoute;
use colored::Colorize;

/// Parse every route spec, stopping at the first bad one.
pub fn parse_routes<S: AsRef<str>>(payload: &[S]) -> Result<Vec<ClasslessRoute>> {
    payload
        .iter()
        .map(|route_spec| {
            let route_spec = route_spec.as_ref();
            log::debug!("processing {route_spec}...");
            route_spec.parse::<ClasslessRoute>().inspect_err(|_| {
                log::info!("invalid route spec: {}", route_spec.on_red());
            })
        })
        .collect()
}

/// Encode already parsed routes, in the order given.
pub fn encode_parsed_routes(routes: &[ClasslessRoute]) -> String {
    if let Some(first) = routes.first() {
        if !first.is_default() {
            log::warn!("first route {first} is not the default route (0.0.0.0/0)");
        }
    }

    let mut ret = String::from(CLASSLESS_ROUTES_PREFIX);
    for route in routes {
        if !route.network.is_canonical() {
            log::warn!(
                "network {} has host bits set, encoding it as {}/{}",
                route.network,
                route.network.lo(),
                route.network.mask
            );
        }
        let encoded = route.encode();
        log::debug!("route {route} => {encoded}");
        ret.push_str(&encoded);
    }
    ret
}

/// Encode route specs (`"a.b.c.d/e g.h.i.j"`) as the option 121 value.
///
/// Routes are not sorted: RouterOS expects the default route first, and
/// listing it first is up to the caller. Any invalid spec fails the whole
/// batch.
///
/// # Examples
/// ```
/// use mikrotik_config_tools::dhcp_options::encode_routes;
/// let value = encode_routes(&["0.0.0.0/0 192.168.0.1", "192.168.1.0/24 192.168.0.1"]).unwrap();
/// assert_eq!(value, "0x00C0A8000118C0A801C0A80001");
/// ```
pub fn encode_routes<S: AsRef<str>>(payload: &[S]) -> Result<String> {
    let routes = parse_routes(payload)?;
    Ok(encode_parsed_routes(&routes))
}
