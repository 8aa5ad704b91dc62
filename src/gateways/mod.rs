// Gateways: how the outside world reaches the domain (HTTP server, Lambda events).

pub mod http;
pub mod lambda;
