// ISO 20022 camt.060.001.03 support
// Typed model plus XML generation through quick-xml's serde serializer

pub mod codes; // Code lists (must be first)
pub mod datetime; // ISODate / ISOTime / ISODateTime
pub mod identification; // Parties, agents, addresses
pub mod camt060; // AccountReportingRequestV03

// Re-exports for convenience
pub use camt060::{
    AccountReportingRequest, BalanceCodeOrProprietary, BalanceSubType, Camt060Builder,
    CashAccount, CashAccountType, CurrencyAndAmount, Document, FloorLimit, FromToDate,
    FromToTime, GroupHeader, ReportingPeriod, ReportingRequest, RequestedBalanceType,
    RequestedTransactionType,
};
pub use codes::{
    AddressTypeCode, BalanceTypeCode, CodeSet, CreditDebitCode, EntryStatusCode, QueryTypeCode,
};
pub use datetime::{IsoDate, IsoDateTime, IsoTime};
pub use identification::{
    AccountOwner, BranchAndFinancialInstitutionIdentification, BranchIdentification,
    ClearingSystemIdentification, ClearingSystemMemberIdentification, DateAndPlaceOfBirth,
    FinancialInstitutionIdentification, GenericOrganisationIdentification,
    GenericPersonIdentification, OrganisationIdentification, PartyChoice, PartyIdentification,
    PersonIdentification, PostalAddress, SchemeNameChoice,
};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::config::EncoderConfig;
use crate::Result;

/// Target schema namespace of the `Document` root
pub const NAMESPACE: &str = "urn:iso:std:iso:20022:tech:xsd:camt.060.001.03";

/// Value of the `xmlns:xsi` attribute
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Message name identification of this schema version
pub const MESSAGE_NAME: &str = "camt.060.001.03";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Serialize one alternative of an ISO choice as its single child element
pub(crate) fn serialize_choice<S, T>(
    serializer: S,
    choice: &'static str,
    tag: &'static str,
    value: &T,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize + ?Sized,
{
    let mut state = serializer.serialize_struct(choice, 1)?;
    state.serialize_field(tag, value)?;
    state.end()
}

/// Generate camt.060 XML for a document
pub fn generate_message(document: &Document, config: &EncoderConfig) -> Result<String> {
    let mut body = String::new();
    let mut ser = quick_xml::se::Serializer::new(&mut body);
    if config.indent.is_enabled() {
        ser.indent(config.indent.character, config.indent.size);
    }
    document.serialize(ser)?;

    let xml = if config.xml_declaration {
        let separator = if config.indent.is_enabled() { "\n" } else { "" };
        format!("{}{}{}", XML_DECLARATION, separator, body)
    } else {
        body
    };

    tracing::debug!(
        message_id = %document.account_reporting_request.group_header.message_id,
        bytes = xml.len(),
        "Generated camt.060 message"
    );

    Ok(xml)
}
