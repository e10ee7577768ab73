// ISO 20022 party, institution and address identification
//
// Shapes follow PartyIdentification43, Party11Choice, Party12Choice,
// PostalAddress6 and BranchAndFinancialInstitutionIdentification5.

use serde::{Serialize, Serializer};

use super::codes::AddressTypeCode;
use super::datetime::IsoDate;
use super::serialize_choice;

/// Maximum number of `AdrLine` entries allowed by the schema
pub const MAX_ADDRESS_LINES: usize = 7;

/// Party Identification
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartyIdentification {
    #[serde(rename = "Nm", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "PstlAdr", skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress>,

    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub identification: Option<PartyChoice>,

    #[serde(rename = "CtryOfRes", skip_serializing_if = "Option::is_none")]
    pub country_of_residence: Option<String>,
}

impl PartyIdentification {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Party (Organisation or Person)
#[derive(Debug, Clone, PartialEq)]
pub enum PartyChoice {
    Organisation(OrganisationIdentification),
    Private(PersonIdentification),
}

impl PartyChoice {
    pub fn organisation(&self) -> Option<&OrganisationIdentification> {
        match self {
            PartyChoice::Organisation(org) => Some(org),
            PartyChoice::Private(_) => None,
        }
    }

    pub fn private(&self) -> Option<&PersonIdentification> {
        match self {
            PartyChoice::Private(person) => Some(person),
            PartyChoice::Organisation(_) => None,
        }
    }
}

impl Serialize for PartyChoice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PartyChoice::Organisation(org) => {
                serialize_choice(serializer, "Party11Choice", "OrgId", org)
            }
            PartyChoice::Private(person) => {
                serialize_choice(serializer, "Party11Choice", "PrvtId", person)
            }
        }
    }
}

/// Organisation Identification
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrganisationIdentification {
    #[serde(rename = "AnyBIC", skip_serializing_if = "Option::is_none")]
    pub any_bic: Option<String>,

    #[serde(rename = "Othr", skip_serializing_if = "Vec::is_empty")]
    pub other: Vec<GenericOrganisationIdentification>,
}

/// Generic Organisation Identification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericOrganisationIdentification {
    #[serde(rename = "Id")]
    pub identification: String,

    #[serde(rename = "SchmeNm", skip_serializing_if = "Option::is_none")]
    pub scheme_name: Option<SchemeNameChoice>,

    #[serde(rename = "Issr", skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

impl GenericOrganisationIdentification {
    pub fn new(identification: impl Into<String>) -> Self {
        Self {
            identification: identification.into(),
            scheme_name: None,
            issuer: None,
        }
    }
}

/// Person Identification
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonIdentification {
    #[serde(rename = "DtAndPlcOfBirth", skip_serializing_if = "Option::is_none")]
    pub date_and_place_of_birth: Option<DateAndPlaceOfBirth>,

    #[serde(rename = "Othr", skip_serializing_if = "Vec::is_empty")]
    pub other: Vec<GenericPersonIdentification>,
}

/// Date and Place of Birth
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateAndPlaceOfBirth {
    #[serde(rename = "BirthDt")]
    pub birth_date: IsoDate,

    #[serde(rename = "PrvcOfBirth", skip_serializing_if = "Option::is_none")]
    pub province_of_birth: Option<String>,

    #[serde(rename = "CityOfBirth")]
    pub city_of_birth: String,

    #[serde(rename = "CtryOfBirth")]
    pub country_of_birth: String,
}

/// Generic Person Identification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericPersonIdentification {
    #[serde(rename = "Id")]
    pub identification: String,

    #[serde(rename = "SchmeNm", skip_serializing_if = "Option::is_none")]
    pub scheme_name: Option<SchemeNameChoice>,

    #[serde(rename = "Issr", skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

/// Identification scheme name, external code or proprietary text
#[derive(Debug, Clone, PartialEq)]
pub enum SchemeNameChoice {
    Code(String),
    Proprietary(String),
}

impl Serialize for SchemeNameChoice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SchemeNameChoice::Code(code) => serialize_choice(serializer, "SchemeName", "Cd", code),
            SchemeNameChoice::Proprietary(text) => {
                serialize_choice(serializer, "SchemeName", "Prtry", text)
            }
        }
    }
}

/// Postal Address
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostalAddress {
    #[serde(rename = "AdrTp", skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressTypeCode>,

    #[serde(rename = "Dept", skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[serde(rename = "SubDept", skip_serializing_if = "Option::is_none")]
    pub sub_department: Option<String>,

    #[serde(rename = "StrtNm", skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,

    #[serde(rename = "BldgNb", skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,

    #[serde(rename = "PstCd", skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,

    #[serde(rename = "TwnNm", skip_serializing_if = "Option::is_none")]
    pub town_name: Option<String>,

    #[serde(rename = "CtrySubDvsn", skip_serializing_if = "Option::is_none")]
    pub country_sub_division: Option<String>,

    #[serde(rename = "Ctry", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(rename = "AdrLine", skip_serializing_if = "Vec::is_empty")]
    pub address_lines: Vec<String>,
}

/// Financial Institution Identification
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FinancialInstitutionIdentification {
    #[serde(rename = "BICFI", skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,

    #[serde(rename = "ClrSysMmbId", skip_serializing_if = "Option::is_none")]
    pub clearing_system_member_id: Option<ClearingSystemMemberIdentification>,

    #[serde(rename = "Nm", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "PstlAdr", skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress>,

    #[serde(rename = "Othr", skip_serializing_if = "Option::is_none")]
    pub other: Option<GenericOrganisationIdentification>,
}

/// Clearing System Member Identification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClearingSystemMemberIdentification {
    #[serde(rename = "ClrSysId", skip_serializing_if = "Option::is_none")]
    pub clearing_system_id: Option<ClearingSystemIdentification>,

    #[serde(rename = "MmbId")]
    pub member_id: String,
}

/// Clearing System Identification
#[derive(Debug, Clone, PartialEq)]
pub enum ClearingSystemIdentification {
    /// ExternalClearingSystemIdentification1Code, e.g. `USABA`
    Code(String),
    Proprietary(String),
}

impl Serialize for ClearingSystemIdentification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ClearingSystemIdentification::Code(code) => {
                serialize_choice(serializer, "ClearingSystemIdentification", "Cd", code)
            }
            ClearingSystemIdentification::Proprietary(text) => {
                serialize_choice(serializer, "ClearingSystemIdentification", "Prtry", text)
            }
        }
    }
}

/// Branch Identification
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BranchIdentification {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub identification: Option<String>,

    #[serde(rename = "Nm", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "PstlAdr", skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress>,
}

/// Agent (Financial Institution and optional branch)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BranchAndFinancialInstitutionIdentification {
    #[serde(rename = "FinInstnId")]
    pub financial_institution_id: FinancialInstitutionIdentification,

    #[serde(rename = "BrnchId", skip_serializing_if = "Option::is_none")]
    pub branch_identification: Option<BranchIdentification>,
}

impl BranchAndFinancialInstitutionIdentification {
    pub fn from_bic(bic: impl Into<String>) -> Self {
        Self {
            financial_institution_id: FinancialInstitutionIdentification {
                bic: Some(bic.into()),
                ..FinancialInstitutionIdentification::default()
            },
            branch_identification: None,
        }
    }
}

/// Account owner, either a party or a financial institution (Party12Choice)
#[derive(Debug, Clone, PartialEq)]
pub enum AccountOwner {
    Party(PartyIdentification),
    Agent(BranchAndFinancialInstitutionIdentification),
}

impl AccountOwner {
    pub fn party(&self) -> Option<&PartyIdentification> {
        match self {
            AccountOwner::Party(party) => Some(party),
            AccountOwner::Agent(_) => None,
        }
    }

    pub fn agent(&self) -> Option<&BranchAndFinancialInstitutionIdentification> {
        match self {
            AccountOwner::Agent(agent) => Some(agent),
            AccountOwner::Party(_) => None,
        }
    }
}

impl Default for AccountOwner {
    fn default() -> Self {
        AccountOwner::Party(PartyIdentification::default())
    }
}

impl Serialize for AccountOwner {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AccountOwner::Party(party) => {
                serialize_choice(serializer, "Party12Choice", "Pty", party)
            }
            AccountOwner::Agent(agent) => {
                serialize_choice(serializer, "Party12Choice", "Agt", agent)
            }
        }
    }
}
