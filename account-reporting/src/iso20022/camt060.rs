// ISO 20022 camt.060.001.03 - AccountReportingRequestV03
// Asks the account servicer for a statement, report or notification
// (camt.052 / camt.053 / camt.054) over a given account and period

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::codes::{BalanceTypeCode, CreditDebitCode, EntryStatusCode, QueryTypeCode};
use super::datetime::{IsoDate, IsoDateTime, IsoTime};
use super::identification::{AccountOwner, BranchAndFinancialInstitutionIdentification};
use super::{generate_message, serialize_choice, NAMESPACE, XSI_NAMESPACE};
use crate::config::EncoderConfig;
use crate::Result;

/// camt.060 Document - AccountReportingRequestV03
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename = "Document")]
pub struct Document {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,

    #[serde(rename = "@xmlns:xsi")]
    xmlns_xsi: &'static str,

    #[serde(rename = "AcctRptgReq")]
    pub account_reporting_request: AccountReportingRequest,
}

impl Document {
    pub fn new(account_reporting_request: AccountReportingRequest) -> Self {
        Self {
            xmlns: NAMESPACE,
            xmlns_xsi: XSI_NAMESPACE,
            account_reporting_request,
        }
    }

    /// Document with every mandatory nested entity present but empty
    pub fn skeleton() -> Self {
        let mut request = ReportingRequest::new(String::new(), AccountOwner::default());
        request.account = Some(CashAccount::default());

        Self::new(AccountReportingRequest {
            group_header: GroupHeader::new(String::new(), IsoDateTime::now()),
            reporting_request: request,
        })
    }

    pub fn namespace(&self) -> &str {
        self.xmlns
    }

    pub fn xsi_namespace(&self) -> &str {
        self.xmlns_xsi
    }

    /// Encode with the default encoder configuration
    pub fn to_xml(&self) -> Result<String> {
        generate_message(self, &EncoderConfig::default())
    }
}

/// Account Reporting Request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountReportingRequest {
    #[serde(rename = "GrpHdr")]
    pub group_header: GroupHeader,

    #[serde(rename = "RptgReq")]
    pub reporting_request: ReportingRequest,
}

/// Group Header (GroupHeader59)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupHeader {
    #[serde(rename = "MsgId")]
    pub message_id: String,

    #[serde(rename = "CreDtTm")]
    pub creation_date_time: IsoDateTime,

    #[serde(rename = "MsgSndr", skip_serializing_if = "Option::is_none")]
    pub message_sender: Option<String>,
}

impl GroupHeader {
    pub fn new(message_id: impl Into<String>, creation_date_time: IsoDateTime) -> Self {
        Self {
            message_id: message_id.into(),
            creation_date_time,
            message_sender: None,
        }
    }
}

/// Reporting Request (ReportingRequest3)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportingRequest {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub identification: Option<String>,

    #[serde(rename = "ReqdMsgNmId")]
    pub requested_message_name_id: String,

    #[serde(rename = "Acct", skip_serializing_if = "Option::is_none")]
    pub account: Option<CashAccount>,

    #[serde(rename = "AcctOwnr")]
    pub account_owner: AccountOwner,

    #[serde(rename = "AcctSvcr", skip_serializing_if = "Option::is_none")]
    pub account_servicer: Option<BranchAndFinancialInstitutionIdentification>,

    #[serde(rename = "RptgPrd", skip_serializing_if = "Option::is_none")]
    pub reporting_period: Option<ReportingPeriod>,

    #[serde(rename = "ReqdTxTp", skip_serializing_if = "Option::is_none")]
    pub requested_transaction_type: Option<RequestedTransactionType>,

    #[serde(rename = "ReqdBalTp", skip_serializing_if = "Option::is_none")]
    pub requested_balance_type: Option<RequestedBalanceType>,
}

impl ReportingRequest {
    pub fn new(requested_message_name_id: impl Into<String>, account_owner: AccountOwner) -> Self {
        Self {
            identification: None,
            requested_message_name_id: requested_message_name_id.into(),
            account: None,
            account_owner,
            account_servicer: None,
            reporting_period: None,
            requested_transaction_type: None,
            requested_balance_type: None,
        }
    }
}

/// Cash Account (CashAccount24)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CashAccount {
    #[serde(rename = "Id")]
    pub identification: String,

    #[serde(rename = "Tp", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<CashAccountType>,

    #[serde(rename = "Ccy", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(rename = "Nm", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CashAccount {
    pub fn new(identification: impl Into<String>) -> Self {
        Self {
            identification: identification.into(),
            ..Self::default()
        }
    }
}

/// Cash Account Type
#[derive(Debug, Clone, PartialEq)]
pub enum CashAccountType {
    /// ExternalCashAccountType1Code: CACC (current), SVGS (savings), etc.
    Code(String),
    Proprietary(String),
}

impl Serialize for CashAccountType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CashAccountType::Code(code) => {
                serialize_choice(serializer, "CashAccountType2Choice", "Cd", code)
            }
            CashAccountType::Proprietary(text) => {
                serialize_choice(serializer, "CashAccountType2Choice", "Prtry", text)
            }
        }
    }
}

/// Reporting Period (ReportingPeriod1)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportingPeriod {
    #[serde(rename = "FrToDt")]
    pub from_to_date: FromToDate,

    #[serde(rename = "FrToTm", skip_serializing_if = "Option::is_none")]
    pub from_to_time: Option<FromToTime>,

    #[serde(rename = "Tp")]
    pub query_type: QueryTypeCode,
}

/// Date range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FromToDate {
    #[serde(rename = "FrDt")]
    pub from_date: IsoDate,

    #[serde(rename = "ToDt", skip_serializing_if = "Option::is_none")]
    pub to_date: Option<IsoDate>,
}

/// Time-of-day range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FromToTime {
    #[serde(rename = "FrTm")]
    pub from_time: IsoTime,

    #[serde(rename = "ToTm", skip_serializing_if = "Option::is_none")]
    pub to_time: Option<IsoTime>,
}

/// Currency and Amount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyAndAmount {
    #[serde(rename = "@Ccy")]
    pub currency: String,

    #[serde(rename = "$text")]
    pub amount: Decimal,
}

impl CurrencyAndAmount {
    pub fn new(currency: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currency: currency.into(),
            amount,
        }
    }
}

/// Floor Limit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorLimit {
    #[serde(rename = "Amt")]
    pub amount: CurrencyAndAmount,

    #[serde(rename = "CdtDbtInd")]
    pub credit_debit_indicator: CreditDebitCode,
}

/// Requested Transaction Type (TransactionType1)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestedTransactionType {
    #[serde(rename = "Sts")]
    pub status: EntryStatusCode,

    #[serde(rename = "CdtDbtInd")]
    pub credit_debit_indicator: CreditDebitCode,

    #[serde(rename = "FlrLmt", skip_serializing_if = "Option::is_none")]
    pub floor_limit: Option<FloorLimit>,
}

/// Balance type code or proprietary text
#[derive(Debug, Clone, PartialEq)]
pub enum BalanceCodeOrProprietary {
    Code(BalanceTypeCode),
    Proprietary(String),
}

impl Serialize for BalanceCodeOrProprietary {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BalanceCodeOrProprietary::Code(code) => {
                serialize_choice(serializer, "BalanceType5Choice", "Cd", code)
            }
            BalanceCodeOrProprietary::Proprietary(text) => {
                serialize_choice(serializer, "BalanceType5Choice", "Prtry", text)
            }
        }
    }
}

/// Balance Sub-Type
#[derive(Debug, Clone, PartialEq)]
pub enum BalanceSubType {
    /// ExternalBalanceSubType1Code
    Code(String),
    Proprietary(String),
}

impl Serialize for BalanceSubType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BalanceSubType::Code(code) => {
                serialize_choice(serializer, "BalanceSubType1Choice", "Cd", code)
            }
            BalanceSubType::Proprietary(text) => {
                serialize_choice(serializer, "BalanceSubType1Choice", "Prtry", text)
            }
        }
    }
}

/// Requested Balance Type (BalanceType13)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestedBalanceType {
    #[serde(rename = "CdOrPrtry")]
    pub code_or_proprietary: BalanceCodeOrProprietary,

    #[serde(rename = "SubTp", skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<BalanceSubType>,
}

/// Builder for camt.060 messages
#[derive(Debug)]
pub struct Camt060Builder {
    message: AccountReportingRequest,
}

impl Camt060Builder {
    pub fn new(
        message_id: impl Into<String>,
        requested_message_name_id: impl Into<String>,
    ) -> Self {
        Self {
            message: AccountReportingRequest {
                group_header: GroupHeader::new(message_id, IsoDateTime::now()),
                reporting_request: ReportingRequest::new(
                    requested_message_name_id,
                    AccountOwner::default(),
                ),
            },
        }
    }

    pub fn with_creation_time(mut self, creation_date_time: IsoDateTime) -> Self {
        self.message.group_header.creation_date_time = creation_date_time;
        self
    }

    pub fn with_message_sender(mut self, sender: impl Into<String>) -> Self {
        self.message.group_header.message_sender = Some(sender.into());
        self
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.message.reporting_request.identification = Some(id.into());
        self
    }

    pub fn with_account(mut self, account: CashAccount) -> Self {
        self.message.reporting_request.account = Some(account);
        self
    }

    pub fn with_account_owner(mut self, owner: AccountOwner) -> Self {
        self.message.reporting_request.account_owner = owner;
        self
    }

    pub fn with_account_servicer(
        mut self,
        servicer: BranchAndFinancialInstitutionIdentification,
    ) -> Self {
        self.message.reporting_request.account_servicer = Some(servicer);
        self
    }

    pub fn with_reporting_period(mut self, period: ReportingPeriod) -> Self {
        self.message.reporting_request.reporting_period = Some(period);
        self
    }

    pub fn with_requested_transaction_type(
        mut self,
        transaction_type: RequestedTransactionType,
    ) -> Self {
        self.message.reporting_request.requested_transaction_type = Some(transaction_type);
        self
    }

    pub fn with_requested_balance_type(mut self, balance_type: RequestedBalanceType) -> Self {
        self.message.reporting_request.requested_balance_type = Some(balance_type);
        self
    }

    pub fn build(self) -> Document {
        Document::new(self.message)
    }
}
