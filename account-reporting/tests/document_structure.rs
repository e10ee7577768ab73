//! Structural tests for encoded camt.060 documents
//!
//! Every document is re-parsed with quick-xml's event reader into a generic
//! element tree and checked against the ISO tag layout:
//! - populated fields appear exactly once, in schema order
//! - unset optional fields leave no element behind
//! - encoding is deterministic

use account_reporting::iso20022::*;
use account_reporting::{generate_message, EncoderConfig, IndentConfig};
use chrono::{FixedOffset, TimeZone};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use rust_decimal::Decimal;

#[derive(Debug, PartialEq)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    fn at(&self, path: &[&str]) -> &Element {
        path.iter()
            .try_fold(self, |el, name| el.child(name))
            .unwrap_or_else(|| panic!("missing element {}", path.join(" > ")))
    }

    fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn element_from(start: &BytesStart<'_>) -> Element {
    let attributes = start
        .attributes()
        .map(|attr| {
            let attr = attr.unwrap();
            (
                String::from_utf8(attr.key.as_ref().to_vec()).unwrap(),
                attr.unescape_value().unwrap().into_owned(),
            )
        })
        .collect();

    Element {
        name: String::from_utf8(start.name().as_ref().to_vec()).unwrap(),
        attributes,
        text: String::new(),
        children: Vec::new(),
    }
}

fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn parse_tree(xml: &str) -> Element {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(start) => stack.push(element_from(&start)),
            Event::Empty(start) => {
                let element = element_from(&start);
                attach(&mut stack, &mut root, element);
            }
            Event::Text(text) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&text.unescape().unwrap());
                }
            }
            Event::End(_) => {
                let element = stack.pop().unwrap();
                attach(&mut stack, &mut root, element);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert!(stack.is_empty(), "unclosed elements");
    root.expect("document has a root element")
}

fn compact() -> EncoderConfig {
    EncoderConfig {
        xml_declaration: false,
        indent: IndentConfig::compact(),
    }
}

fn creation_time() -> IsoDateTime {
    let offset = FixedOffset::east_opt(3600).unwrap();
    IsoDateTime::new(offset.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()).unwrap()
}

fn full_address() -> PostalAddress {
    PostalAddress {
        address_type: Some(AddressTypeCode::Business),
        department: Some("Treasury".to_string()),
        sub_department: Some("Cash Management".to_string()),
        street_name: Some("Sheikh Zayed Road".to_string()),
        building_number: Some("12".to_string()),
        post_code: Some("00000".to_string()),
        town_name: Some("Dubai".to_string()),
        country_sub_division: Some("DU".to_string()),
        country: Some("AE".to_string()),
        address_lines: vec!["Tower B".to_string(), "Floor 21".to_string()],
    }
}

fn full_document() -> Document {
    let owner = PartyIdentification {
        name: Some("ACME Trading LLC".to_string()),
        postal_address: Some(full_address()),
        identification: Some(PartyChoice::Organisation(OrganisationIdentification {
            any_bic: Some("ACMEAEADXXX".to_string()),
            other: vec![GenericOrganisationIdentification {
                identification: "123456789".to_string(),
                scheme_name: Some(SchemeNameChoice::Code("TXID".to_string())),
                issuer: Some("FTA".to_string()),
            }],
        })),
        country_of_residence: Some("AE".to_string()),
    };

    let servicer = BranchAndFinancialInstitutionIdentification {
        financial_institution_id: FinancialInstitutionIdentification {
            bic: Some("UAEBAE21".to_string()),
            clearing_system_member_id: Some(ClearingSystemMemberIdentification {
                clearing_system_id: Some(ClearingSystemIdentification::Proprietary(
                    "UAEFTS".to_string(),
                )),
                member_id: "0331".to_string(),
            }),
            name: Some("Emirates Bank".to_string()),
            postal_address: Some(full_address()),
            other: Some(GenericOrganisationIdentification::new("EB-01")),
        },
        branch_identification: Some(BranchIdentification {
            identification: Some("BR-7".to_string()),
            name: Some("Downtown".to_string()),
            postal_address: Some(PostalAddress {
                country: Some("AE".to_string()),
                ..PostalAddress::default()
            }),
        }),
    };

    Camt060Builder::new("MSG001", "camt.052.001.02")
        .with_creation_time(creation_time())
        .with_message_sender("ACMEAEAD")
        .with_request_id("REQ-2024-001")
        .with_account(CashAccount {
            identification: "ACC123".to_string(),
            account_type: Some(CashAccountType::Code("CACC".to_string())),
            currency: Some("AED".to_string()),
            name: Some("Operating account".to_string()),
        })
        .with_account_owner(AccountOwner::Party(owner))
        .with_account_servicer(servicer)
        .with_reporting_period(ReportingPeriod {
            from_to_date: FromToDate {
                from_date: IsoDate::from_ymd(2024, 1, 1).unwrap(),
                to_date: Some(IsoDate::from_ymd(2024, 1, 14).unwrap()),
            },
            from_to_time: Some(FromToTime {
                from_time: IsoTime::from_hms(8, 0, 0).unwrap(),
                to_time: Some(IsoTime::from_hms(17, 30, 0).unwrap()),
            }),
            query_type: QueryTypeCode::Changed,
        })
        .with_requested_transaction_type(RequestedTransactionType {
            status: EntryStatusCode::Pending,
            credit_debit_indicator: CreditDebitCode::Debit,
            floor_limit: Some(FloorLimit {
                amount: CurrencyAndAmount::new("AED", Decimal::new(250000, 2)),
                credit_debit_indicator: CreditDebitCode::Debit,
            }),
        })
        .with_requested_balance_type(RequestedBalanceType {
            code_or_proprietary: BalanceCodeOrProprietary::Code(BalanceTypeCode::InterimAvailable),
            sub_type: Some(BalanceSubType::Proprietary("INTRADAY".to_string())),
        })
        .build()
}

#[test]
fn test_end_to_end_minimal_request() {
    let document = Camt060Builder::new("MSG001", "camt.052.001.02")
        .with_creation_time(creation_time())
        .with_account(CashAccount::new("ACC123"))
        .build();

    let xml = generate_message(&document, &EncoderConfig::default()).unwrap();
    let root = parse_tree(&xml);

    assert_eq!(root.name, "Document");
    assert_eq!(root.child_names(), vec!["AcctRptgReq"]);
    assert_eq!(root.at(&["AcctRptgReq", "GrpHdr", "MsgId"]).text, "MSG001");
    assert_eq!(
        root.at(&["AcctRptgReq", "GrpHdr", "CreDtTm"]).text,
        "2024-01-15T10:30:00+0100"
    );

    let account = root.at(&["AcctRptgReq", "RptgReq", "Acct"]);
    assert_eq!(account.child_names(), vec!["Id"]);
    assert_eq!(account.at(&["Id"]).text, "ACC123");
    assert!(account.child("Nm").is_none());
    assert!(account.child("Tp").is_none());
    assert!(account.child("Ccy").is_none());
}

#[test]
fn test_envelope_namespace_and_xsi_attribute() {
    let xml = generate_message(&full_document(), &compact()).unwrap();
    let root = parse_tree(&xml);

    assert_eq!(root.attribute("xmlns"), Some(NAMESPACE));
    assert_eq!(root.attribute("xmlns:xsi"), Some(XSI_NAMESPACE));
    assert_eq!(root.attributes.len(), 2);
}

#[test]
fn test_fully_populated_document_layout() {
    let xml = generate_message(&full_document(), &compact()).unwrap();
    let root = parse_tree(&xml);

    let request = root.at(&["AcctRptgReq"]);
    assert_eq!(request.child_names(), vec!["GrpHdr", "RptgReq"]);
    assert_eq!(
        request.at(&["GrpHdr"]).child_names(),
        vec!["MsgId", "CreDtTm", "MsgSndr"]
    );

    let rptg = request.at(&["RptgReq"]);
    assert_eq!(
        rptg.child_names(),
        vec![
            "Id",
            "ReqdMsgNmId",
            "Acct",
            "AcctOwnr",
            "AcctSvcr",
            "RptgPrd",
            "ReqdTxTp",
            "ReqdBalTp",
        ]
    );
    assert_eq!(rptg.at(&["Id"]).text, "REQ-2024-001");
    assert_eq!(rptg.at(&["Acct"]).child_names(), vec!["Id", "Tp", "Ccy", "Nm"]);
    assert_eq!(rptg.at(&["Acct", "Tp", "Cd"]).text, "CACC");

    let party = rptg.at(&["AcctOwnr", "Pty"]);
    assert_eq!(rptg.at(&["AcctOwnr"]).child_names(), vec!["Pty"]);
    assert_eq!(party.child_names(), vec!["Nm", "PstlAdr", "Id", "CtryOfRes"]);
    assert_eq!(
        party.at(&["PstlAdr"]).child_names(),
        vec![
            "AdrTp",
            "Dept",
            "SubDept",
            "StrtNm",
            "BldgNb",
            "PstCd",
            "TwnNm",
            "CtrySubDvsn",
            "Ctry",
            "AdrLine",
            "AdrLine",
        ]
    );
    assert_eq!(party.at(&["PstlAdr", "AdrTp"]).text, "BIZZ");
    let lines: Vec<&str> = party
        .at(&["PstlAdr"])
        .children
        .iter()
        .filter(|c| c.name == "AdrLine")
        .map(|c| c.text.as_str())
        .collect();
    assert_eq!(lines, vec!["Tower B", "Floor 21"]);

    assert_eq!(party.at(&["Id"]).child_names(), vec!["OrgId"]);
    assert_eq!(party.at(&["Id", "OrgId"]).child_names(), vec!["AnyBIC", "Othr"]);
    assert_eq!(
        party.at(&["Id", "OrgId", "Othr"]).child_names(),
        vec!["Id", "SchmeNm", "Issr"]
    );
    assert_eq!(party.at(&["Id", "OrgId", "Othr", "SchmeNm", "Cd"]).text, "TXID");

    let servicer = rptg.at(&["AcctSvcr"]);
    assert_eq!(servicer.child_names(), vec!["FinInstnId", "BrnchId"]);
    assert_eq!(
        servicer.at(&["FinInstnId"]).child_names(),
        vec!["BICFI", "ClrSysMmbId", "Nm", "PstlAdr", "Othr"]
    );
    assert_eq!(
        servicer.at(&["FinInstnId", "ClrSysMmbId"]).child_names(),
        vec!["ClrSysId", "MmbId"]
    );
    assert_eq!(servicer.at(&["FinInstnId", "ClrSysMmbId", "ClrSysId", "Prtry"]).text, "UAEFTS");
    assert_eq!(servicer.at(&["BrnchId"]).child_names(), vec!["Id", "Nm", "PstlAdr"]);
    assert_eq!(servicer.at(&["BrnchId", "PstlAdr"]).child_names(), vec!["Ctry"]);

    let period = rptg.at(&["RptgPrd"]);
    assert_eq!(period.child_names(), vec!["FrToDt", "FrToTm", "Tp"]);
    assert_eq!(period.at(&["FrToDt", "FrDt"]).text, "2024-01-01");
    assert_eq!(period.at(&["FrToDt", "ToDt"]).text, "2024-01-14");
    assert_eq!(period.at(&["FrToTm", "FrTm"]).text, "08:00:00");
    assert_eq!(period.at(&["FrToTm", "ToTm"]).text, "17:30:00");
    assert_eq!(period.at(&["Tp"]).text, "CHNG");

    let transaction_type = rptg.at(&["ReqdTxTp"]);
    assert_eq!(transaction_type.child_names(), vec!["Sts", "CdtDbtInd", "FlrLmt"]);
    assert_eq!(transaction_type.at(&["Sts"]).text, "PDNG");
    assert_eq!(transaction_type.at(&["CdtDbtInd"]).text, "DBIT");
    let amount = transaction_type.at(&["FlrLmt", "Amt"]);
    assert_eq!(amount.attribute("Ccy"), Some("AED"));
    assert_eq!(amount.text, "2500.00");

    let balance_type = rptg.at(&["ReqdBalTp"]);
    assert_eq!(balance_type.child_names(), vec!["CdOrPrtry", "SubTp"]);
    assert_eq!(balance_type.at(&["CdOrPrtry", "Cd"]).text, "ITAV");
    assert_eq!(balance_type.at(&["SubTp", "Prtry"]).text, "INTRADAY");
}

#[test]
fn test_unset_optionals_leave_no_elements() {
    let agent = BranchAndFinancialInstitutionIdentification::from_bic("DEUTDEFF");
    let document = Camt060Builder::new("MSG002", "camt.053.001.02")
        .with_creation_time(creation_time())
        .with_account_owner(AccountOwner::Agent(agent))
        .build();

    let xml = generate_message(&document, &compact()).unwrap();
    let root = parse_tree(&xml);

    assert_eq!(root.at(&["AcctRptgReq", "GrpHdr"]).child_names(), vec!["MsgId", "CreDtTm"]);

    let rptg = root.at(&["AcctRptgReq", "RptgReq"]);
    assert_eq!(rptg.child_names(), vec!["ReqdMsgNmId", "AcctOwnr"]);
    assert_eq!(rptg.at(&["AcctOwnr"]).child_names(), vec!["Agt"]);
    assert_eq!(rptg.at(&["AcctOwnr", "Agt"]).child_names(), vec!["FinInstnId"]);
    assert_eq!(rptg.at(&["AcctOwnr", "Agt", "FinInstnId"]).child_names(), vec!["BICFI"]);
}

#[test]
fn test_private_person_identification() {
    let person = PersonIdentification {
        date_and_place_of_birth: Some(DateAndPlaceOfBirth {
            birth_date: IsoDate::from_ymd(1980, 7, 4).unwrap(),
            province_of_birth: None,
            city_of_birth: "Mumbai".to_string(),
            country_of_birth: "IN".to_string(),
        }),
        other: vec![GenericPersonIdentification {
            identification: "P1234567".to_string(),
            scheme_name: Some(SchemeNameChoice::Proprietary("PASSPORT".to_string())),
            issuer: None,
        }],
    };

    let document = Camt060Builder::new("MSG003", "camt.054.001.02")
        .with_creation_time(creation_time())
        .with_account_owner(AccountOwner::Party(PartyIdentification {
            identification: Some(PartyChoice::Private(person)),
            ..PartyIdentification::default()
        }))
        .build();

    let xml = generate_message(&document, &compact()).unwrap();
    let root = parse_tree(&xml);

    let id = root.at(&["AcctRptgReq", "RptgReq", "AcctOwnr", "Pty", "Id"]);
    assert_eq!(id.child_names(), vec!["PrvtId"]);
    assert_eq!(id.at(&["PrvtId"]).child_names(), vec!["DtAndPlcOfBirth", "Othr"]);
    assert_eq!(
        id.at(&["PrvtId", "DtAndPlcOfBirth"]).child_names(),
        vec!["BirthDt", "CityOfBirth", "CtryOfBirth"]
    );
    assert_eq!(id.at(&["PrvtId", "DtAndPlcOfBirth", "BirthDt"]).text, "1980-07-04");
    assert_eq!(id.at(&["PrvtId", "Othr"]).child_names(), vec!["Id", "SchmeNm"]);
    assert_eq!(id.at(&["PrvtId", "Othr", "SchmeNm", "Prtry"]).text, "PASSPORT");
}

#[test]
fn test_encoding_is_idempotent() {
    let document = full_document();
    let config = EncoderConfig::default();

    let first = generate_message(&document, &config).unwrap();
    let second = generate_message(&document, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_pretty_and_compact_encode_same_tree() {
    let document = full_document();

    let pretty = generate_message(&document, &EncoderConfig::default()).unwrap();
    let flat = generate_message(&document, &compact()).unwrap();

    assert!(pretty.contains('\n'));
    assert!(!flat.contains('\n'));
    assert_eq!(parse_tree(&pretty), parse_tree(&flat));
}

#[test]
fn test_text_is_escaped() {
    let document = Camt060Builder::new("MSG<4", "camt.052.001.02")
        .with_creation_time(creation_time())
        .with_account_owner(AccountOwner::Party(PartyIdentification::named("Smith & Sons")))
        .build();

    let xml = generate_message(&document, &compact()).unwrap();
    assert!(xml.contains("Smith &amp; Sons"));
    assert!(xml.contains("MSG&lt;4"));

    let root = parse_tree(&xml);
    assert_eq!(root.at(&["AcctRptgReq", "RptgReq", "AcctOwnr", "Pty", "Nm"]).text, "Smith & Sons");
    assert_eq!(root.at(&["AcctRptgReq", "GrpHdr", "MsgId"]).text, "MSG<4");
}

#[test]
fn test_skeleton_encodes() {
    let xml = Document::skeleton().to_xml().unwrap();
    let root = parse_tree(&xml);

    assert_eq!(
        root.at(&["AcctRptgReq", "RptgReq"]).child_names(),
        vec!["ReqdMsgNmId", "Acct", "AcctOwnr"]
    );
    assert_eq!(root.at(&["AcctRptgReq", "RptgReq", "AcctOwnr"]).child_names(), vec!["Pty"]);
}
