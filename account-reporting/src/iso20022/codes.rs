// ISO 20022 code lists used by camt.060.001.03
//
// Every list is a closed enumeration of four-letter tokens with its own
// 1-based discriminant space. `CodeSet` keeps the single flat numbering
// shared by all lists; typed fields always use the per-list enums.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::{Error, Result};

macro_rules! code_list {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $list:literal in $flat:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $disc:literal => $token:literal, )+
        }
    ) => {
        code_list! {
            $(#[$meta])*
            pub enum $name : $list {
                $( $(#[$vmeta])* $variant = $disc => $token, )+
            }
        }

        impl From<$name> for $flat {
            fn from(code: $name) -> Self {
                match code {
                    $( $name::$variant => $flat::$variant, )+
                }
            }
        }
    };
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $list:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $disc:literal => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $disc, )+
        }

        impl $name {
            /// ISO name of the code list
            pub const LIST: &'static str = $list;

            /// All codes in discriminant order
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Look up a code by its discriminant
            pub fn from_discriminant(value: u8) -> Result<Self> {
                match value {
                    $( $disc => Ok($name::$variant), )+
                    other => Err(Error::InvalidCode {
                        list: $list,
                        value: other.to_string(),
                    }),
                }
            }

            pub fn discriminant(self) -> u8 {
                self as u8
            }

            /// Four-letter wire token
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $( $token => Ok($name::$variant), )+
                    other => Err(Error::InvalidCode {
                        list: $list,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

code_list! {
    /// Flat code set spanning every list below.
    ///
    /// Only used for numeric lookups; it does not appear in any message field.
    pub enum CodeSet : "CodeSet" {
        Expected = 1 => "XPCD",
        OpeningAvailable = 2 => "OPAV",
        InterimAvailable = 3 => "ITAV",
        ClosingAvailable = 4 => "CLAV",
        ForwardAvailable = 5 => "FWAV",
        ClosingBooked = 6 => "CLBD",
        InterimBooked = 7 => "ITBD",
        OpeningBooked = 8 => "OPBD",
        PreviouslyClosedBooked = 9 => "PRCD",
        Information = 10 => "INFO",
        Booked = 11 => "BOOK",
        Pending = 12 => "PDNG",
        Credit = 13 => "CRDT",
        Debit = 14 => "DBIT",
        All = 15 => "ALLL",
        Changed = 16 => "CHNG",
        Modified = 17 => "MODF",
        Postal = 18 => "ADDR",
        POBox = 19 => "PBOX",
        Residential = 20 => "HOME",
        Business = 21 => "BIZZ",
        MailTo = 22 => "MLTO",
        DeliveryTo = 23 => "DLVY",
    }
}

code_list! {
    /// Balance type (BalanceType12Code)
    pub enum BalanceTypeCode : "BalanceType12Code" in CodeSet {
        Expected = 1 => "XPCD",
        OpeningAvailable = 2 => "OPAV",
        InterimAvailable = 3 => "ITAV",
        ClosingAvailable = 4 => "CLAV",
        ForwardAvailable = 5 => "FWAV",
        ClosingBooked = 6 => "CLBD",
        InterimBooked = 7 => "ITBD",
        OpeningBooked = 8 => "OPBD",
        PreviouslyClosedBooked = 9 => "PRCD",
        Information = 10 => "INFO",
    }
}

code_list! {
    /// Entry status (EntryStatus1Code)
    pub enum EntryStatusCode : "EntryStatus1Code" in CodeSet {
        Booked = 1 => "BOOK",
        Pending = 2 => "PDNG",
        Information = 3 => "INFO",
    }
}

code_list! {
    /// Credit/debit indicator (CreditDebitCode)
    pub enum CreditDebitCode : "CreditDebitCode" in CodeSet {
        Credit = 1 => "CRDT",
        Debit = 2 => "DBIT",
    }
}

code_list! {
    /// Scope of the requested report (QueryType3Code)
    pub enum QueryTypeCode : "QueryType3Code" in CodeSet {
        /// Full refresh
        All = 1 => "ALLL",
        Changed = 2 => "CHNG",
        Modified = 3 => "MODF",
    }
}

code_list! {
    /// Postal address type (AddressType2Code)
    pub enum AddressTypeCode : "AddressType2Code" in CodeSet {
        Postal = 1 => "ADDR",
        POBox = 2 => "PBOX",
        Residential = 3 => "HOME",
        Business = 4 => "BIZZ",
        MailTo = 5 => "MLTO",
        DeliveryTo = 6 => "DLVY",
    }
}
