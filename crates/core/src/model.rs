//! Typed offer document produced by the form layer.
//!
//! Field names follow the camelCase JSON the form emits. Every optional
//! field is an `Option`; list fields default to empty, which the
//! transformer treats the same as absent. The engine does not enforce
//! conditional requiredness (e.g. a description being mandatory when a
//! type code is "99") -- upstream validation owns correctness, the engine
//! only decides emission.

use serde::{Deserialize, Serialize};

/// Full input for one build call. Constructed once per call from whatever
/// the form/session state holds; the engine never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OffertaDocument {
    pub basic_info: BasicInfo,
    pub offer_details: OfferDetails,
    pub activation_contacts: ActivationContacts,
    #[serde(default)]
    pub pricing_config: PricingConfig,
    #[serde(default)]
    pub company_components: CompanyComponents,
    pub payment_conditions: PaymentConditions,
    #[serde(default)]
    pub additional_features: AdditionalFeatures,
    pub validity_review: ValidityReview,
}

/// The two mandatory identifiers. Both are uppercased on output
/// regardless of input case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub piva_utente: String,
    pub cod_offerta: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferDetails {
    pub tipo_mercato: String,
    /// Single-offer flag; only defined for non-dual market types.
    pub offerta_singola: Option<String>,
    pub tipo_cliente: String,
    /// Residential-status code; only defined for domestic clients.
    pub domestico_residente: Option<String>,
    pub tipo_offerta: String,
    /// Contract-activation type codes, one or more.
    pub tipologia_att_contr: Vec<String>,
    pub nome_offerta: String,
    pub descrizione: String,
    /// Duration in months; `-1` means indefinite.
    pub durata: i64,
    pub garanzie: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivationContacts {
    /// Activation-method codes, one or more.
    pub modalita: Vec<String>,
    /// Free-text description; mandatory upstream only when a method code
    /// is "99" (other).
    pub descrizione: Option<String>,
    pub telefono: String,
    pub url_sito_venditore: Option<String>,
    pub url_offerta: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    pub riferimenti_prezzo_energia: Option<RiferimentiPrezzoEnergia>,
    pub tipo_prezzo: Option<TipoPrezzo>,
    pub fasce_orarie_settimanale: Option<FasceOrarieSettimanale>,
    #[serde(default)]
    pub dispacciamento: Vec<Dispacciamento>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiferimentiPrezzoEnergia {
    pub idx_prezzo_energia: Option<String>,
    /// Description for index code "99" (other).
    pub altro: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TipoPrezzo {
    pub tipologia_fasce: String,
}

/// Per-weekday time-band assignment, seven weekdays plus holiday. Any
/// absent key is omitted from the output block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FasceOrarieSettimanale {
    pub f_lunedi: Option<String>,
    pub f_martedi: Option<String>,
    pub f_mercoledi: Option<String>,
    pub f_giovedi: Option<String>,
    pub f_venerdi: Option<String>,
    pub f_sabato: Option<String>,
    pub f_domenica: Option<String>,
    pub f_festivita: Option<String>,
}

/// One dispatching-fee component of an electricity offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dispacciamento {
    pub tipo_dispacciamento: String,
    pub valore_disp: Option<f64>,
    pub nome: String,
    pub descrizione: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyComponents {
    /// Regulated-component codes.
    #[serde(default)]
    pub componenti_regolate: Vec<String>,
    #[serde(default)]
    pub componente_impresa: Vec<ComponenteImpresa>,
}

/// A company-defined price component with one or more price intervals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponenteImpresa {
    pub nome: String,
    pub descrizione: String,
    pub tipologia: String,
    pub macroarea: String,
    pub intervallo_prezzi: Vec<IntervalloPrezzo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntervalloPrezzo {
    pub fascia_componente: Option<String>,
    pub consumo_da: Option<f64>,
    pub consumo_a: Option<f64>,
    pub prezzo: f64,
    pub unita_misura: String,
    pub periodo_validita: Option<PeriodoValidita>,
}

/// Validity period attached to price intervals and discounts. Emitted
/// only when at least one sub-field is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodoValidita {
    pub durata: Option<i64>,
    pub valido_fino: Option<String>,
    #[serde(default)]
    pub mese_validita: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConditions {
    /// Payment methods, one or more.
    pub metodo_pagamento: Vec<MetodoPagamento>,
    #[serde(default)]
    pub condizioni_contrattuali: Vec<CondizioneContrattuale>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetodoPagamento {
    pub modalita_pagamento: String,
    /// Mandatory upstream only when the method code is "99" (other).
    pub descrizione: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CondizioneContrattuale {
    pub tipologia_condizione: String,
    pub altro: Option<String>,
    pub descrizione: String,
    /// Limiting-flag code.
    pub limitante: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalFeatures {
    pub caratteristiche_offerta: Option<CaratteristicheOfferta>,
    pub offerta_dual: Option<OffertaDual>,
    pub zone_offerta: Option<ZoneOfferta>,
    #[serde(default)]
    pub sconto: Vec<Sconto>,
    #[serde(default)]
    pub prodotti_servizi_aggiuntivi: Vec<ProdottoServizioAggiuntivo>,
}

/// Consumption/power range characteristics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaratteristicheOfferta {
    pub consumo_min: Option<f64>,
    pub consumo_max: Option<f64>,
    pub potenza_min: Option<f64>,
    pub potenza_max: Option<f64>,
}

/// Joint-offer code lists for a dual-fuel offer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OffertaDual {
    #[serde(default)]
    pub offerte_congiunte_ee: Vec<String>,
    #[serde(default)]
    pub offerte_congiunte_gas: Vec<String>,
}

/// Geographic restriction of the offer. A list left empty is omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneOfferta {
    #[serde(default)]
    pub regione: Vec<String>,
    #[serde(default)]
    pub provincia: Vec<String>,
    #[serde(default)]
    pub comune: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sconto {
    pub nome: String,
    pub descrizione: String,
    #[serde(default)]
    pub codice_componente_fascia: Vec<String>,
    pub validita: Option<String>,
    /// VAT-applicability code.
    pub iva_sconto: String,
    pub periodo_validita: Option<PeriodoValidita>,
    pub condizione: CondizioneApplicazioneSconto,
    /// Discount price entries, one or more.
    pub prezzi_sconto: Vec<PrezzoSconto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CondizioneApplicazioneSconto {
    pub condizione_applicazione: String,
    pub descrizione_condizione: Option<String>,
}

/// One discount price entry. The range bounds are independently optional;
/// the engine emits whichever are present without cross-checking them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrezzoSconto {
    pub tipologia: String,
    pub valido_da: Option<f64>,
    pub valido_fino: Option<f64>,
    pub unita_misura: String,
    pub prezzo: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProdottoServizioAggiuntivo {
    pub nome: String,
    pub dettaglio: String,
    pub macroarea: Option<MacroArea>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MacroArea {
    pub macroarea: String,
    /// Details for macro-area code "99" (other).
    pub dettagli_macroarea: Option<String>,
}

/// The offer's validity window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidityReview {
    pub data_inizio: String,
    pub data_fine: String,
}
