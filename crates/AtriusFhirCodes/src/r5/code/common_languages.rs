//! Common languages (BCP 47) shared by the `Language`, `NameLanguage` and
//! `ItemDescriptionLanguage` bindings.
//!
//! The three bindings enumerate the same codes from `urn:ietf:bcp:47`, so the
//! list lives here once and is spliced into each `code_system!` invocation.

/// Expands `$mac! { <prefix> <common language entries> }`.
macro_rules! with_common_languages {
    ($mac:ident ! { $($prefix:tt)* }) => {
        $mac! {
            $($prefix)*

            Ar, AR = "ar" => "Arabic";
            Bg, BG = "bg" => "Bulgarian";
            BgBg, BG_BG = "bg-BG" => "Bulgarian (Bulgaria)";
            Bn, BN = "bn" => "Bengali";
            Cs, CS = "cs" => "Czech";
            CsCz, CS_CZ = "cs-CZ" => "Czech (Czechia)";
            Bs, BS = "bs" => "Bosnian";
            BsBa, BS_BA = "bs-BA" => "Bosnian (Bosnia and Herzegovina)";
            Da, DA = "da" => "Danish";
            DaDk, DA_DK = "da-DK" => "Danish (Denmark)";
            De, DE = "de" => "German";
            DeAt, DE_AT = "de-AT" => "German (Austria)";
            DeCh, DE_CH = "de-CH" => "German (Switzerland)";
            DeDe, DE_DE = "de-DE" => "German (Germany)";
            El, EL = "el" => "Greek";
            ElGr, EL_GR = "el-GR" => "Greek (Greece)";
            En, EN = "en" => "English";
            EnAu, EN_AU = "en-AU" => "English (Australia)";
            EnCa, EN_CA = "en-CA" => "English (Canada)";
            EnGb, EN_GB = "en-GB" => "English (Great Britain)";
            EnIn, EN_IN = "en-IN" => "English (India)";
            EnNz, EN_NZ = "en-NZ" => "English (New Zealand)";
            EnSg, EN_SG = "en-SG" => "English (Singapore)";
            EnUs, EN_US = "en-US" => "English (United States)";
            Es, ES = "es" => "Spanish";
            EsAr, ES_AR = "es-AR" => "Spanish (Argentina)";
            EsEs, ES_ES = "es-ES" => "Spanish (Spain)";
            EsUy, ES_UY = "es-UY" => "Spanish (Uruguay)";
            Et, ET = "et" => "Estonian";
            EtEe, ET_EE = "et-EE" => "Estonian (Estonia)";
            Fi, FI = "fi" => "Finnish";
            Fr, FR = "fr" => "French";
            FrBe, FR_BE = "fr-BE" => "French (Belgium)";
            FrCh, FR_CH = "fr-CH" => "French (Switzerland)";
            FrFr, FR_FR = "fr-FR" => "French (France)";
            FiFi, FI_FI = "fi-FI" => "Finnish (Finland)";
            FrCa, FR_CA = "fr-CA" => "French (Canada)";
            Fy, FY = "fy" => "Frisian";
            FyNl, FY_NL = "fy-NL" => "Frisian (Netherlands)";
            Hi, HI = "hi" => "Hindi";
            Hr, HR = "hr" => "Croatian";
            HrHr, HR_HR = "hr-HR" => "Croatian (Croatia)";
            Is, IS = "is" => "Icelandic";
            IsIs, IS_IS = "is-IS" => "Icelandic (Iceland)";
            It, IT = "it" => "Italian";
            ItCh, IT_CH = "it-CH" => "Italian (Switzerland)";
            ItIt, IT_IT = "it-IT" => "Italian (Italy)";
            Ja, JA = "ja" => "Japanese";
            Ko, KO = "ko" => "Korean";
            Lt, LT = "lt" => "Lithuanian";
            LtLt, LT_LT = "lt-LT" => "Lithuanian (Lithuania)";
            Lv, LV = "lv" => "Latvian";
            LvLv, LV_LV = "lv-LV" => "Latvian (Latvia)";
            Nl, NL = "nl" => "Dutch";
            NlBe, NL_BE = "nl-BE" => "Dutch (Belgium)";
            NlNl, NL_NL = "nl-NL" => "Dutch (Netherlands)";
            No, NO = "no" => "Norwegian";
            NoNo, NO_NO = "no-NO" => "Norwegian (Norway)";
            Pa, PA = "pa" => "Punjabi";
            Pl, PL = "pl" => "Polish";
            PlPl, PL_PL = "pl-PL" => "Polish (Poland)";
            Pt, PT = "pt" => "Portuguese";
            PtPt, PT_PT = "pt-PT" => "Portuguese (Portugal)";
            PtBr, PT_BR = "pt-BR" => "Portuguese (Brazil)";
            Ro, RO = "ro" => "Romanian";
            RoRo, RO_RO = "ro-RO" => "Romanian (Romania)";
            Ru, RU = "ru" => "Russian";
            RuRu, RU_RU = "ru-RU" => "Russian (Russia)";
            Sk, SK = "sk" => "Slovakian";
            SkSk, SK_SK = "sk-SK" => "Slovakian (Slovakia)";
            Sl, SL = "sl" => "Slovenian";
            SlSi, SL_SI = "sl-SI" => "Slovenian (Slovenia)";
            Sr, SR = "sr" => "Serbian";
            SrRs, SR_RS = "sr-RS" => "Serbian (Serbia)";
            Sv, SV = "sv" => "Swedish";
            SvSe, SV_SE = "sv-SE" => "Swedish (Sweden)";
            Te, TE = "te" => "Telugu";
            Zh, ZH = "zh" => "Chinese";
            ZhCn, ZH_CN = "zh-CN" => "Chinese (China)";
            ZhHk, ZH_HK = "zh-HK" => "Chinese (Hong Kong)";
            ZhSg, ZH_SG = "zh-SG" => "Chinese (Singapore)";
            ZhTw, ZH_TW = "zh-TW" => "Chinese (Taiwan)";
        }
    };
}

pub(crate) use with_common_languages;
