//! Built-in configuration documents

use super::aggregate::RawDocument;
use crate::domain::a002_configuration_parameter::{RawParam, SelectOption};

fn module(name: &str, icon: &str, parameters: Vec<RawParam>) -> RawDocument {
    RawDocument {
        name: name.to_string(),
        icon: icon.to_string(),
        description: format!(
            "{} modülüne ait yapılandırmaları buradan yönetebilirsiniz.",
            name
        ),
        parameters,
    }
}

/// Documents in list order; codes are assigned from this order
pub fn builtin_documents() -> Vec<RawDocument> {
    vec![
        module("Satış", "fa-cart-shopping", vec![]),
        module("Satınalma", "fa-truck", vec![]),
        module("Üretim", "fa-industry", production_parameters()),
        module("Sistem", "fa-gear", vec![]),
        module("Muhasebe", "fa-calculator", vec![]),
        module("Finans", "fa-coins", vec![]),
    ]
}

/// Production reporting (üretim bildirme) parameters
pub fn production_parameters() -> Vec<RawParam> {
    vec![
        RawParam::switch(
            "Operatör kodu okutulsun",
            "Operatör kart/QR okutma zorunlu olsun.",
            true,
        ),
        RawParam::switch(
            "Tezgâh okutulsun",
            "Tezgâh seçimi kart/QR okutma ile yapılsın.",
            false,
        ),
        RawParam::number(
            "Başlamış işler gün aralığı",
            "‘Başlamış işler’ listesinde geriye dönük gün sayısı.",
            1,
            365,
            1,
            7,
        ),
        RawParam::number(
            "Bitmiş işler gün aralığı",
            "‘Bitmiş işler’ listesinde geriye dönük gün sayısı.",
            1,
            365,
            1,
            30,
        ),
        RawParam::switch(
            "Bitiş miktarı bildirilsin",
            "Tamamlanan miktar kullanıcıdan istenir.",
            true,
        ),
        RawParam::switch(
            "Lot/seri zorunlu",
            "Ürünlerde lot/seri numarası zorunlu olsun.",
            false,
        ),
        RawParam::switch(
            "Ürün resmi butonu",
            "Operatör ekranında ürün resmi açma butonu görünsün.",
            true,
        ),
        RawParam::switch(
            "Çoklu operatör seçimi",
            "Aynı bildirimde birden fazla operatör atanabilsin.",
            false,
        ),
        RawParam::switch(
            "Duruş girişi",
            "Operatör duruş nedenlerini bildirebilsin.",
            true,
        ),
        RawParam::switch(
            "Ek malzeme tüketimi",
            "Plan dışı ek malzeme tüketimi yapılabilsin.",
            false,
        ),
        RawParam::switch(
            "Fire bildirimi",
            "Üretimde oluşan fire miktarı girilebilsin.",
            true,
        ),
        RawParam::switch(
            "Yan ürün bildirimi",
            "Ana üretime bağlı yan ürün bildirimi yapılabilsin.",
            false,
        ),
        RawParam::switch(
            "Sonraki iş başlangıcı otomatik",
            "Bir işin bitişi sonraki işin başlangıcı olsun.",
            true,
        ),
        RawParam::select(
            "Operatör seçimi ekranı",
            "Operatör seçimi hangi adımda yapılacak?",
            vec![
                SelectOption::new("start", "Başlangıç ekranı"),
                SelectOption::new("end", "Bitiş ekranı"),
                SelectOption::new("both", "Her iki ekran"),
            ],
            "start",
        ),
        RawParam::switch(
            "Başlamış/bitmiş sekmeli görünüm",
            "Listelerde iki durum ayrı sekmelerde gösterilsin.",
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_configuration_document::aggregate::build_document_list;

    #[test]
    fn production_document_is_third() {
        let docs = build_document_list(builtin_documents());
        assert_eq!(docs.len(), 6);
        let uretim = &docs[2];
        assert_eq!(uretim.name, "Üretim");
        assert_eq!(uretim.code.as_str(), "YPLN-0003");
        assert_eq!(uretim.catalog.len(), 15);
        assert_eq!(
            uretim.catalog.definitions()[14].code.as_str(),
            "YPLN-0003.0015"
        );
    }
}
