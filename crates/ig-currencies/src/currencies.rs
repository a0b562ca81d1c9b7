//! Pre-defined currency constants.

use crate::currency::Currency;

/// U.S. Dollar.
pub const USD: Currency = Currency {
    code: "USD",
    name: "U.S. Dollar",
    numeric_code: 840,
    fractions_per_unit: 100,
};

/// Euro.
pub const EUR: Currency = Currency {
    code: "EUR",
    name: "Euro",
    numeric_code: 978,
    fractions_per_unit: 100,
};

/// British pound sterling.
pub const GBP: Currency = Currency {
    code: "GBP",
    name: "British Pound",
    numeric_code: 826,
    fractions_per_unit: 100,
};

/// Japanese Yen.
pub const JPY: Currency = Currency {
    code: "JPY",
    name: "Japanese Yen",
    numeric_code: 392,
    fractions_per_unit: 1,
};

/// Swiss Franc.
pub const CHF: Currency = Currency {
    code: "CHF",
    name: "Swiss Franc",
    numeric_code: 756,
    fractions_per_unit: 100,
};

/// Australian Dollar.
pub const AUD: Currency = Currency {
    code: "AUD",
    name: "Australian Dollar",
    numeric_code: 36,
    fractions_per_unit: 100,
};

/// Canadian Dollar.
pub const CAD: Currency = Currency {
    code: "CAD",
    name: "Canadian Dollar",
    numeric_code: 124,
    fractions_per_unit: 100,
};

/// Brazilian Real.
pub const BRL: Currency = Currency {
    code: "BRL",
    name: "Brazilian Real",
    numeric_code: 986,
    fractions_per_unit: 100,
};

/// Swedish Krona.
pub const SEK: Currency = Currency {
    code: "SEK",
    name: "Swedish Krona",
    numeric_code: 752,
    fractions_per_unit: 100,
};

/// Norwegian Krone.
pub const NOK: Currency = Currency {
    code: "NOK",
    name: "Norwegian Krone",
    numeric_code: 578,
    fractions_per_unit: 100,
};

/// Danish Krone.
pub const DKK: Currency = Currency {
    code: "DKK",
    name: "Danish Krone",
    numeric_code: 208,
    fractions_per_unit: 100,
};

/// Korean Won.
pub const KRW: Currency = Currency {
    code: "KRW",
    name: "South-Korean Won",
    numeric_code: 410,
    fractions_per_unit: 1,
};

/// Every built-in currency, for code lookup.
pub const ALL: [Currency; 12] = [USD, EUR, GBP, JPY, CHF, AUD, CAD, BRL, SEK, NOK, DKK, KRW];
