//! Structure transformation: offer document to ordered element tree.
//!
//! Mandatory blocks come first, in the order the SII tracciato fixes;
//! optional blocks follow, each appended only when its governing data is
//! present. Element order depends only on this append sequence, never on
//! input key order. Emission rules only -- conditional requiredness is
//! upstream's concern.

use crate::model::*;
use crate::node::{ElementBuilder, XmlElement};

/// Build the root `Offerta` element for a full offer document.
pub fn transform(doc: &OffertaDocument) -> XmlElement {
    let features = &doc.additional_features;
    ElementBuilder::new("Offerta")
        // Mandatory blocks, fixed order.
        .child(identificativi(&doc.basic_info))
        .child(dettaglio_offerta(&doc.offer_details))
        .child(modalita_attivazione(&doc.activation_contacts))
        .child(contatti(&doc.activation_contacts))
        .child(validita_offerta(&doc.validity_review))
        .extend(
            doc.payment_conditions
                .metodo_pagamento
                .iter()
                .map(metodo_pagamento),
        )
        // Optional tail, fixed order, present-only.
        .child_opt(
            doc.pricing_config
                .riferimenti_prezzo_energia
                .as_ref()
                .and_then(riferimenti_prezzo_energia),
        )
        .child_opt(doc.pricing_config.tipo_prezzo.as_ref().map(tipo_prezzo))
        .child_opt(
            doc.pricing_config
                .fasce_orarie_settimanale
                .as_ref()
                .and_then(fasce_orarie_settimanale),
        )
        .extend(doc.pricing_config.dispacciamento.iter().map(dispacciamento))
        .child_opt(componenti_regolate(
            &doc.company_components.componenti_regolate,
        ))
        .extend(
            doc.company_components
                .componente_impresa
                .iter()
                .map(componente_impresa),
        )
        .extend(
            doc.payment_conditions
                .condizioni_contrattuali
                .iter()
                .map(condizione_contrattuale),
        )
        .child_opt(
            features
                .caratteristiche_offerta
                .as_ref()
                .and_then(caratteristiche_offerta),
        )
        .child_opt(features.offerta_dual.as_ref().and_then(offerta_dual))
        .child_opt(features.zone_offerta.as_ref().and_then(zone_offerta))
        .extend(features.sconto.iter().map(sconto))
        .extend(
            features
                .prodotti_servizi_aggiuntivi
                .iter()
                .map(prodotto_servizio_aggiuntivo),
        )
        .build()
}

fn identificativi(info: &BasicInfo) -> XmlElement {
    ElementBuilder::new("IdentificativiOfferta")
        .leaf("PIVA_UTENTE", &info.piva_utente.to_uppercase())
        .leaf("COD_OFFERTA", &info.cod_offerta.to_uppercase())
        .build()
}

fn dettaglio_offerta(d: &OfferDetails) -> XmlElement {
    ElementBuilder::new("DettaglioOfferta")
        .leaf("TIPO_MERCATO", &d.tipo_mercato)
        .leaf_opt("OFFERTA_SINGOLA", d.offerta_singola.as_deref())
        .leaf("TIPO_CLIENTE", &d.tipo_cliente)
        .leaf_opt("DOMESTICO_RESIDENTE", d.domestico_residente.as_deref())
        .leaf("TIPO_OFFERTA", &d.tipo_offerta)
        .list("TIPOLOGIA_ATT_CONTR", &d.tipologia_att_contr)
        .leaf("NOME_OFFERTA", &d.nome_offerta)
        .leaf("DESCRIZIONE", &d.descrizione)
        .leaf_num("DURATA", d.durata)
        .leaf("GARANZIE", &d.garanzie)
        .build()
}

fn modalita_attivazione(c: &ActivationContacts) -> XmlElement {
    ElementBuilder::new("DettaglioOfferta.ModalitaAttivazione")
        .list("MODALITA", &c.modalita)
        .leaf_opt("DESCRIZIONE", c.descrizione.as_deref())
        .build()
}

fn contatti(c: &ActivationContacts) -> XmlElement {
    ElementBuilder::new("DettaglioOfferta.Contatti")
        .leaf("TELEFONO", &c.telefono)
        .leaf_opt("URL_SITO_VENDITORE", c.url_sito_venditore.as_deref())
        .leaf_opt("URL_OFFERTA", c.url_offerta.as_deref())
        .build()
}

fn validita_offerta(v: &ValidityReview) -> XmlElement {
    ElementBuilder::new("ValiditaOfferta")
        .leaf("DATA_INIZIO", &v.data_inizio)
        .leaf("DATA_FINE", &v.data_fine)
        .build()
}

fn metodo_pagamento(m: &MetodoPagamento) -> XmlElement {
    ElementBuilder::new("MetodoPagamento")
        .leaf("MODALITA_PAGAMENTO", &m.modalita_pagamento)
        .leaf_opt("DESCRIZIONE", m.descrizione.as_deref())
        .build()
}

fn riferimenti_prezzo_energia(r: &RiferimentiPrezzoEnergia) -> Option<XmlElement> {
    ElementBuilder::new("RiferimentiPrezzoEnergia")
        .leaf_opt("IDX_PREZZO_ENERGIA", r.idx_prezzo_energia.as_deref())
        .leaf_opt("ALTRO", r.altro.as_deref())
        .build_nonempty()
}

fn tipo_prezzo(t: &TipoPrezzo) -> XmlElement {
    ElementBuilder::new("TipoPrezzo")
        .leaf("TIPOLOGIA_FASCE", &t.tipologia_fasce)
        .build()
}

fn fasce_orarie_settimanale(f: &FasceOrarieSettimanale) -> Option<XmlElement> {
    ElementBuilder::new("FasceOrarieSettimanale")
        .leaf_opt("F_LUNEDI", f.f_lunedi.as_deref())
        .leaf_opt("F_MARTEDI", f.f_martedi.as_deref())
        .leaf_opt("F_MERCOLEDI", f.f_mercoledi.as_deref())
        .leaf_opt("F_GIOVEDI", f.f_giovedi.as_deref())
        .leaf_opt("F_VENERDI", f.f_venerdi.as_deref())
        .leaf_opt("F_SABATO", f.f_sabato.as_deref())
        .leaf_opt("F_DOMENICA", f.f_domenica.as_deref())
        .leaf_opt("F_FESTIVITA", f.f_festivita.as_deref())
        .build_nonempty()
}

fn dispacciamento(d: &Dispacciamento) -> XmlElement {
    ElementBuilder::new("Dispacciamento")
        .leaf("TIPO_DISPACCIAMENTO", &d.tipo_dispacciamento)
        .leaf_num_opt("VALORE_DISP", d.valore_disp)
        .leaf("NOME", &d.nome)
        .leaf_opt("DESCRIZIONE", d.descrizione.as_deref())
        .build()
}

fn componenti_regolate(codici: &[String]) -> Option<XmlElement> {
    ElementBuilder::new("ComponentiRegolate")
        .list("CODICE", codici)
        .build_nonempty()
}

fn componente_impresa(c: &ComponenteImpresa) -> XmlElement {
    ElementBuilder::new("ComponenteImpresa")
        .leaf("NOME", &c.nome)
        .leaf("DESCRIZIONE", &c.descrizione)
        .leaf("TIPOLOGIA", &c.tipologia)
        .leaf("MACROAREA", &c.macroarea)
        .extend(c.intervallo_prezzi.iter().map(intervallo_prezzi))
        .build()
}

fn intervallo_prezzi(i: &IntervalloPrezzo) -> XmlElement {
    ElementBuilder::new("IntervalloPrezzi")
        .leaf_opt("FASCIA_COMPONENTE", i.fascia_componente.as_deref())
        .leaf_num_opt("CONSUMO_DA", i.consumo_da)
        .leaf_num_opt("CONSUMO_A", i.consumo_a)
        .leaf_num("PREZZO", i.prezzo)
        .leaf("UNITA_MISURA", &i.unita_misura)
        .child_opt(i.periodo_validita.as_ref().and_then(periodo_validita))
        .build()
}

/// Shared between price intervals and discounts; omitted when all
/// sub-fields are absent.
fn periodo_validita(p: &PeriodoValidita) -> Option<XmlElement> {
    ElementBuilder::new("PeriodoValidita")
        .leaf_num_opt("DURATA", p.durata)
        .leaf_opt("VALIDO_FINO", p.valido_fino.as_deref())
        .list("MESE_VALIDITA", &p.mese_validita)
        .build_nonempty()
}

fn condizione_contrattuale(c: &CondizioneContrattuale) -> XmlElement {
    ElementBuilder::new("CondizioniContrattuali")
        .leaf("TIPOLOGIA_CONDIZIONE", &c.tipologia_condizione)
        .leaf_opt("ALTRO", c.altro.as_deref())
        .leaf("DESCRIZIONE", &c.descrizione)
        .leaf("LIMITANTE", &c.limitante)
        .build()
}

fn caratteristiche_offerta(c: &CaratteristicheOfferta) -> Option<XmlElement> {
    ElementBuilder::new("CaratteristicheOfferta")
        .leaf_num_opt("CONSUMO_MIN", c.consumo_min)
        .leaf_num_opt("CONSUMO_MAX", c.consumo_max)
        .leaf_num_opt("POTENZA_MIN", c.potenza_min)
        .leaf_num_opt("POTENZA_MAX", c.potenza_max)
        .build_nonempty()
}

fn offerta_dual(d: &OffertaDual) -> Option<XmlElement> {
    ElementBuilder::new("OffertaDUAL")
        .list("OFFERTE_CONGIUNTE_EE", &d.offerte_congiunte_ee)
        .list("OFFERTE_CONGIUNTE_GAS", &d.offerte_congiunte_gas)
        .build_nonempty()
}

fn zone_offerta(z: &ZoneOfferta) -> Option<XmlElement> {
    ElementBuilder::new("ZoneOfferta")
        .list("REGIONE", &z.regione)
        .list("PROVINCIA", &z.provincia)
        .list("COMUNE", &z.comune)
        .build_nonempty()
}

fn sconto(s: &Sconto) -> XmlElement {
    ElementBuilder::new("Sconto")
        .leaf("NOME", &s.nome)
        .leaf("DESCRIZIONE", &s.descrizione)
        .list("CODICE_COMPONENTE_FASCIA", &s.codice_componente_fascia)
        .leaf_opt("VALIDITA", s.validita.as_deref())
        .leaf("IVA_SCONTO", &s.iva_sconto)
        .child_opt(s.periodo_validita.as_ref().and_then(periodo_validita))
        .child(condizione_sconto(&s.condizione))
        .extend(s.prezzi_sconto.iter().map(prezzo_sconto))
        .build()
}

fn condizione_sconto(c: &CondizioneApplicazioneSconto) -> XmlElement {
    ElementBuilder::new("Condizione")
        .leaf("CONDIZIONE_APPLICAZIONE", &c.condizione_applicazione)
        .leaf_opt(
            "DESCRIZIONE_CONDIZIONE",
            c.descrizione_condizione.as_deref(),
        )
        .build()
}

fn prezzo_sconto(p: &PrezzoSconto) -> XmlElement {
    ElementBuilder::new("PREZZISconto")
        .leaf("TIPOLOGIA", &p.tipologia)
        .leaf_num_opt("VALIDO_DA", p.valido_da)
        .leaf_num_opt("VALIDO_FINO", p.valido_fino)
        .leaf("UNITA_MISURA", &p.unita_misura)
        .leaf_num("PREZZO", p.prezzo)
        .build()
}

fn prodotto_servizio_aggiuntivo(p: &ProdottoServizioAggiuntivo) -> XmlElement {
    ElementBuilder::new("ProdottiServiziAggiuntivi")
        .leaf("NOME", &p.nome)
        .leaf("DETTAGLIO", &p.dettaglio)
        .child_opt(p.macroarea.as_ref().map(macro_area))
        .build()
}

fn macro_area(m: &MacroArea) -> XmlElement {
    ElementBuilder::new("MacroArea")
        .leaf("MACROAREA", &m.macroarea)
        .leaf_opt("DETTAGLI_MACROAREA", m.dettagli_macroarea.as_deref())
        .build()
}
