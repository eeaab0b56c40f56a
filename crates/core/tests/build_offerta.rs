//! Integration tests for the full build pipeline: offer JSON in, SII XML
//! out, plus the filename and export contracts the form layer depends on.

use offerta_core::{build, export_filename, export_xml, OffertaDocument};

fn parse(json: &str) -> OffertaDocument {
    serde_json::from_str(json).expect("fixture should deserialize")
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Smallest document the form layer can produce: mandatory sections only.
fn minimal_fixture() -> OffertaDocument {
    parse(
        r#"{
        "basicInfo": {"pivaUtente": "it12345678901", "codOfferta": "offer001"},
        "offerDetails": {
            "tipoMercato": "01",
            "offertaSingola": "SI",
            "tipoCliente": "01",
            "tipoOfferta": "01",
            "tipologiaAttContr": ["01"],
            "nomeOfferta": "Offerta Base",
            "descrizione": "Descrizione base",
            "durata": -1,
            "garanzie": "NO"
        },
        "activationContacts": {"modalita": ["01"], "telefono": "800123456"},
        "paymentConditions": {"metodoPagamento": [{"modalitaPagamento": "01"}]},
        "validityReview": {"dataInizio": "01/01/2024", "dataFine": "31/12/2024"}
    }"#,
    )
}

/// A document exercising every optional section.
fn full_fixture() -> OffertaDocument {
    parse(
        r#"{
        "basicInfo": {"pivaUtente": "it12345678901", "codOfferta": "verde24"},
        "offerDetails": {
            "tipoMercato": "01",
            "offertaSingola": "SI",
            "tipoCliente": "01",
            "domesticoResidente": "01",
            "tipoOfferta": "02",
            "tipologiaAttContr": ["01", "02"],
            "nomeOfferta": "Offerta Verde Casa",
            "descrizione": "Energia 100% rinnovabile",
            "durata": 12,
            "garanzie": "Deposito cauzionale 11,50 euro"
        },
        "activationContacts": {
            "modalita": ["01", "99"],
            "descrizione": "Attivazione presso agenzia partner",
            "telefono": "800123456",
            "urlSitoVenditore": "https://esempio.it",
            "urlOfferta": "https://esempio.it/verde"
        },
        "pricingConfig": {
            "riferimentiPrezzoEnergia": {"idxPrezzoEnergia": "03"},
            "tipoPrezzo": {"tipologiaFasce": "03"},
            "fasceOrarieSettimanale": {
                "fLunedi": "01", "fMartedi": "01", "fMercoledi": "01",
                "fGiovedi": "01", "fVenerdi": "01", "fSabato": "02",
                "fDomenica": "03", "fFestivita": "03"
            },
            "dispacciamento": [
                {
                    "tipoDispacciamento": "01",
                    "valoreDisp": 0,
                    "nome": "Disp. del.111/06",
                    "descrizione": "Corrispettivo di dispacciamento"
                },
                {"tipoDispacciamento": "99", "nome": "Altro dispacciamento"}
            ]
        },
        "companyComponents": {
            "componentiRegolate": ["01", "02"],
            "componenteImpresa": [
                {
                    "nome": "Commercializzazione",
                    "descrizione": "Quota fissa annua",
                    "tipologia": "01",
                    "macroarea": "01",
                    "intervalloPrezzi": [
                        {"prezzo": 72, "unitaMisura": "01"},
                        {
                            "fasciaComponente": "01",
                            "consumoDa": 0,
                            "consumoA": 1800,
                            "prezzo": 0.153,
                            "unitaMisura": "02",
                            "periodoValidita": {"durata": 12, "meseValidita": ["01", "02"]}
                        }
                    ]
                }
            ]
        },
        "paymentConditions": {
            "metodoPagamento": [
                {"modalitaPagamento": "01"},
                {"modalitaPagamento": "99", "descrizione": "Carta di credito"}
            ],
            "condizioniContrattuali": [
                {
                    "tipologiaCondizione": "01",
                    "descrizione": "Recesso anticipato",
                    "limitante": "SI"
                },
                {
                    "tipologiaCondizione": "99",
                    "altro": "Clausola dedicata",
                    "descrizione": "Condizione aggiuntiva",
                    "limitante": "NO"
                }
            ]
        },
        "additionalFeatures": {
            "caratteristicheOfferta": {
                "consumoMin": 0, "consumoMax": 2700,
                "potenzaMin": 1.5, "potenzaMax": 4.5
            },
            "offertaDual": {
                "offerteCongiunteEe": ["VERDE24EE"],
                "offerteCongiunteGas": ["VERDE24GAS"]
            },
            "zoneOfferta": {"regione": ["08"], "provincia": ["015"], "comune": ["015146"]},
            "sconto": [
                {
                    "nome": "Sconto benvenuto",
                    "descrizione": "Sconto primo anno",
                    "codiceComponenteFascia": ["01"],
                    "validita": "01",
                    "ivaSconto": "01",
                    "periodoValidita": {"durata": 12},
                    "condizione": {"condizioneApplicazione": "00"},
                    "prezziSconto": [
                        {
                            "tipologia": "01",
                            "validoDa": 0,
                            "validoFino": 1800,
                            "unitaMisura": "02",
                            "prezzo": 0.01
                        },
                        {"tipologia": "02", "unitaMisura": "01", "prezzo": 0}
                    ]
                }
            ],
            "prodottiServiziAggiuntivi": [
                {
                    "nome": "Caldaia sicura",
                    "dettaglio": "Manutenzione annuale inclusa",
                    "macroarea": {"macroarea": "99", "dettagliMacroarea": "Servizi manutenzione"}
                }
            ]
        },
        "validityReview": {"dataInizio": "01/06/2024", "dataFine": "31/12/2024"}
    }"#,
    )
}

#[test]
fn minimal_document_matches_golden_output() {
    let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<Offerta>
    <IdentificativiOfferta>
        <PIVA_UTENTE>IT12345678901</PIVA_UTENTE>
        <COD_OFFERTA>OFFER001</COD_OFFERTA>
    </IdentificativiOfferta>
    <DettaglioOfferta>
        <TIPO_MERCATO>01</TIPO_MERCATO>
        <OFFERTA_SINGOLA>SI</OFFERTA_SINGOLA>
        <TIPO_CLIENTE>01</TIPO_CLIENTE>
        <TIPO_OFFERTA>01</TIPO_OFFERTA>
        <TIPOLOGIA_ATT_CONTR>01</TIPOLOGIA_ATT_CONTR>
        <NOME_OFFERTA>Offerta Base</NOME_OFFERTA>
        <DESCRIZIONE>Descrizione base</DESCRIZIONE>
        <DURATA>-1</DURATA>
        <GARANZIE>NO</GARANZIE>
    </DettaglioOfferta>
    <DettaglioOfferta.ModalitaAttivazione>
        <MODALITA>01</MODALITA>
    </DettaglioOfferta.ModalitaAttivazione>
    <DettaglioOfferta.Contatti>
        <TELEFONO>800123456</TELEFONO>
    </DettaglioOfferta.Contatti>
    <ValiditaOfferta>
        <DATA_INIZIO>01/01/2024</DATA_INIZIO>
        <DATA_FINE>31/12/2024</DATA_FINE>
    </ValiditaOfferta>
    <MetodoPagamento>
        <MODALITA_PAGAMENTO>01</MODALITA_PAGAMENTO>
    </MetodoPagamento>
</Offerta>
"#;
    assert_eq!(build(&minimal_fixture()), expected);
}

#[test]
fn identifiers_are_uppercased() {
    let xml = build(&minimal_fixture());
    assert!(xml.contains("<PIVA_UTENTE>IT12345678901</PIVA_UTENTE>"));
    assert!(xml.contains("<COD_OFFERTA>OFFER001</COD_OFFERTA>"));
}

#[test]
fn absent_optional_sections_never_appear() {
    let xml = build(&minimal_fixture());
    for tag in [
        "<RiferimentiPrezzoEnergia>",
        "<TipoPrezzo>",
        "<FasceOrarieSettimanale>",
        "<Dispacciamento>",
        "<ComponentiRegolate>",
        "<ComponenteImpresa>",
        "<CondizioniContrattuali>",
        "<CaratteristicheOfferta>",
        "<OffertaDUAL>",
        "<ZoneOfferta>",
        "<Sconto>",
        "<ProdottiServiziAggiuntivi>",
        "<DOMESTICO_RESIDENTE>",
        "<URL_OFFERTA>",
    ] {
        assert!(!xml.contains(tag), "{} should be absent", tag);
    }
}

#[test]
fn present_optional_sections_appear_exactly_once() {
    let xml = build(&full_fixture());
    for tag in [
        "<RiferimentiPrezzoEnergia>",
        "<TipoPrezzo>",
        "<FasceOrarieSettimanale>",
        "<ComponentiRegolate>",
        "<CaratteristicheOfferta>",
        "<OffertaDUAL>",
        "<ZoneOfferta>",
        "<Sconto>",
        "<ComponenteImpresa>",
        "<ProdottiServiziAggiuntivi>",
        "<MacroArea>",
        "<Condizione>",
    ] {
        assert_eq!(count(&xml, tag), 1, "{} should appear once", tag);
    }
}

#[test]
fn repeated_blocks_emit_one_element_per_entry() {
    let xml = build(&full_fixture());
    assert_eq!(count(&xml, "<MetodoPagamento>"), 2);
    assert_eq!(count(&xml, "<Dispacciamento>"), 2);
    assert_eq!(count(&xml, "<CondizioniContrattuali>"), 2);
    assert_eq!(count(&xml, "<IntervalloPrezzi>"), 2);
    assert_eq!(count(&xml, "<PREZZISconto>"), 2);
    assert_eq!(count(&xml, "<PeriodoValidita>"), 2);
    assert_eq!(count(&xml, "<TIPOLOGIA_ATT_CONTR>"), 2);
    assert_eq!(count(&xml, "<MODALITA>"), 2);
    assert_eq!(count(&xml, "<CODICE>"), 2);
    assert_eq!(count(&xml, "<MESE_VALIDITA>"), 2);
}

#[test]
fn empty_array_emits_no_element_at_all() {
    let mut doc = full_fixture();
    doc.payment_conditions.condizioni_contrattuali.clear();
    doc.company_components.componenti_regolate.clear();
    let xml = build(&doc);
    assert_eq!(count(&xml, "<CondizioniContrattuali>"), 0);
    assert_eq!(count(&xml, "<ComponentiRegolate>"), 0);
    assert_eq!(count(&xml, "<CODICE>"), 0);
}

#[test]
fn mandatory_blocks_keep_the_fixed_order() {
    let xml = build(&full_fixture());
    let offsets: Vec<usize> = [
        "<IdentificativiOfferta>",
        "<DettaglioOfferta>",
        "<DettaglioOfferta.ModalitaAttivazione>",
        "<DettaglioOfferta.Contatti>",
        "<ValiditaOfferta>",
        "<MetodoPagamento>",
    ]
    .iter()
    .map(|tag| xml.find(tag).unwrap_or_else(|| panic!("{} missing", tag)))
    .collect();
    for pair in offsets.windows(2) {
        assert!(pair[0] < pair[1], "mandatory block order violated");
    }
}

#[test]
fn reserved_characters_in_text_are_escaped() {
    let mut doc = minimal_fixture();
    doc.offer_details.nome_offerta = "Luce & Gas <Casa> \"Più\"".to_string();
    let xml = build(&doc);
    assert!(xml.contains("<NOME_OFFERTA>Luce &amp; Gas &lt;Casa&gt; &quot;Più&quot;</NOME_OFFERTA>"));
}

#[test]
fn invalid_characters_are_dropped_from_output() {
    let mut doc = minimal_fixture();
    doc.offer_details.descrizione = "testo\u{1} pulito 🎉".to_string();
    let xml = build(&doc);
    assert!(xml.contains("<DESCRIZIONE>testo pulito </DESCRIZIONE>"));
}

#[test]
fn output_contains_no_carriage_returns() {
    let mut doc = full_fixture();
    doc.offer_details.descrizione = "riga uno\r\nriga due".to_string();
    let xml = build(&doc);
    assert!(!xml.contains('\r'));
    assert!(xml.contains('\n'));
}

#[test]
fn numeric_zero_is_emitted_and_absent_is_not() {
    let xml = build(&full_fixture());
    // Second discount price is an explicit zero with no range bounds.
    assert!(xml.contains("<PREZZO>0</PREZZO>"));
    assert!(xml.contains("<VALORE_DISP>0</VALORE_DISP>"));
    assert!(xml.contains("<CONSUMO_DA>0</CONSUMO_DA>"));
    // Only the first discount price declares a range.
    assert_eq!(count(&xml, "<VALIDO_DA>"), 1);
    assert_eq!(count(&xml, "<VALIDO_FINO>"), 1);
    assert!(xml.contains("<VALIDO_DA>0</VALIDO_DA>"));
    assert!(xml.contains("<VALIDO_FINO>1800</VALIDO_FINO>"));
}

#[test]
fn indefinite_duration_renders_with_a_leading_minus() {
    let xml = build(&minimal_fixture());
    assert!(xml.contains("<DURATA>-1</DURATA>"));
}

#[test]
fn fractional_prices_render_in_natural_decimal_form() {
    let xml = build(&full_fixture());
    assert!(xml.contains("<PREZZO>0.153</PREZZO>"));
    assert!(xml.contains("<PREZZO>72</PREZZO>"));
    assert!(xml.contains("<POTENZA_MIN>1.5</POTENZA_MIN>"));
}

#[test]
fn build_is_deterministic_across_calls() {
    let doc = full_fixture();
    assert_eq!(build(&doc), build(&doc));
}

#[test]
fn filename_follows_the_transmission_convention() {
    let doc = minimal_fixture();
    assert_eq!(
        export_filename(&doc.basic_info.piva_utente, None),
        "IT12345678901_INSERIMENTO.XML"
    );
    assert_eq!(
        export_filename(&doc.basic_info.piva_utente, Some(&doc.offer_details.nome_offerta)),
        "IT12345678901_INSERIMENTO_OFFERTA_BASE.XML"
    );
}

#[test]
fn export_failure_modes_report_without_writing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let empty_content = export_xml("", "f.xml", dir.path());
    assert!(!empty_content.success);
    assert!(!empty_content.error.expect("error").to_string().is_empty());

    let empty_name = export_xml("text", "", dir.path());
    assert!(!empty_name.success);
    assert!(!empty_name.error.expect("error").to_string().is_empty());

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn build_then_export_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let doc = full_fixture();
    let xml = build(&doc);
    let name = export_filename(&doc.basic_info.piva_utente, Some(&doc.offer_details.nome_offerta));
    let outcome = export_xml(&xml, &name, dir.path());
    assert!(outcome.success, "export failed: {:?}", outcome.error);
    let written = std::fs::read_to_string(outcome.path.expect("path")).unwrap();
    assert_eq!(written, xml);
}
