//! Lazy activation прокси для hunters
//!
//! Dormant → Active (один переход, без возврата).
//! Dormant прокси дешёвый: линейный дрейф к игроку без pursuit математики.

pub mod activation;


pub use activation::{
    Activation, HunterProxy, ProxyContext, ProxyState, PLACEHOLDER_HALF_SIZE,
};
