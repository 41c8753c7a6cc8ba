use std::{fmt, str::FromStr};

use crate::error::Error;

/// Token supported by the price fetcher.
///
/// * [`Symbol::Prism`] is the pivot asset, every other price is expressed through it.
/// * [`Symbol::Cluna`], [`Symbol::Pluna`] and [`Symbol::Yluna`] are the Prism
///   refracted LUNA derivatives, each traded against PRISM in its own pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Prism,
    Cluna,
    Pluna,
    Yluna,
}

impl Symbol {
    /// Pivot asset of the price chain.
    pub const PIVOT: Symbol = Symbol::Prism;

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Prism => "PRISM",
            Symbol::Cluna => "CLUNA",
            Symbol::Pluna => "PLUNA",
            Symbol::Yluna => "YLUNA",
        }
    }

    pub fn is_pivot(&self) -> bool {
        *self == Self::PIVOT
    }

    /// Registry entry of the symbol.
    pub fn market(&self) -> &'static Market {
        // Table rows follow the enum declaration order.
        &MARKETS[*self as usize]
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MARKETS
            .iter()
            .find(|m| m.symbol.as_str() == s)
            .map(|m| m.symbol)
            .ok_or_else(|| Error::UnknownSymbol(s.to_string()))
    }
}

/// Token listed on PrismSwap together with the pair trading it against the pivot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Market {
    pub symbol: Symbol,
    /// cw20 token contract.
    pub asset: &'static str,
    /// Liquidity pool contract.
    pub pair: &'static str,
}

/// Asset and pair registry.
pub static MARKETS: [Market; 4] = [
    Market {
        symbol: Symbol::Prism,
        asset: "terra1dh9478k2qvqhqeajhn75a2a7dsnf74y5ukregw",
        pair: "terra19d2alknajcngdezrdhq40h6362k92kz23sz62u",
    },
    Market {
        symbol: Symbol::Cluna,
        asset: "terra13zaagrrrxj47qjwczsczujlvnnntde7fdt0mau",
        pair: "terra1yxgq5y6mw30xy9mmvz9mllneddy9jaxndrphvk",
    },
    Market {
        symbol: Symbol::Pluna,
        asset: "terra1tlgelulz9pdkhls6uglfn5lmxarx7f2gxtdzh2",
        pair: "terra1persuahr6f8fm6nyup0xjc7aveaur89nwgs5vs",
    },
    Market {
        symbol: Symbol::Yluna,
        asset: "terra17wkadg0tah554r35x6wvff0y5s7ve8npcjfuhz",
        pair: "terra1kqc65n5060rtvcgcktsxycdt2a4r67q2zlvhce",
    },
];
