//! Yamato Transport B2 manifest (CSV, 95 columns, header row included).

use shipdesk_core::normalize::{
    map_delivery_window, normalize_date_separators, DELIVERY_DATE_ATTRIBUTE,
    DELIVERY_WINDOW_ATTRIBUTE,
};
use shipdesk_core::CoreResult;
use shipdesk_shared::NormalizedOrder;

use crate::column::ColumnSpec;
use crate::context::RowContext;
use crate::derived::{self, region_kanji};
use crate::fields::OrderField;
use crate::profile::{CarrierProfile, ProfileError};
use crate::shipper::YamatoShipper;

pub const PROFILE_NAME: &str = "yamato";
pub const YAMATO_WIDTH: usize = 95;
const SHIP_DATE_FORMAT: &str = "%Y/%m/%d";

fn requested_delivery_date(order: &NormalizedOrder, _ctx: &RowContext) -> CoreResult<String> {
    Ok(order
        .attribute(DELIVERY_DATE_ATTRIBUTE)
        .map(normalize_date_separators)
        .unwrap_or_default())
}

fn delivery_window(order: &NormalizedOrder, _ctx: &RowContext) -> CoreResult<String> {
    let window = order.attribute(DELIVERY_WINDOW_ATTRIBUTE).unwrap_or_default();
    Ok(map_delivery_window(window).to_string())
}

/// Prefecture + city + street line. The building line has its own column.
fn delivery_address(order: &NormalizedOrder, _ctx: &RowContext) -> CoreResult<String> {
    let Some(address) = &order.shipping_address else {
        return Ok(String::new());
    };
    Ok(format!(
        "{}{}{}",
        region_kanji(order),
        address.city.as_deref().unwrap_or_default(),
        address.address1.as_deref().unwrap_or_default()
    ))
}

pub fn profile(shipper: &YamatoShipper) -> Result<CarrierProfile<NormalizedOrder>, ProfileError> {
    let columns: Vec<ColumnSpec<NormalizedOrder>> = vec![
        ColumnSpec::blank("お客様管理番号"),
        ColumnSpec::derived("送り状種類", |_, ctx| Ok(ctx.shipment_type.code().to_string())),
        ColumnSpec::blank("クール区分"),
        ColumnSpec::blank("伝票番号"),
        ColumnSpec::derived("出荷予定日", |_, ctx| Ok(ctx.ship_date.format(SHIP_DATE_FORMAT).to_string())),
        ColumnSpec::derived("お届け予定日", requested_delivery_date),
        ColumnSpec::derived("配達時間帯", delivery_window),
        ColumnSpec::blank("お届け先コード"),
        ColumnSpec::derived("お届け先電話番号", derived::recipient_phone),
        ColumnSpec::blank("お届け先電話番号枝番"),
        ColumnSpec::field("お届け先郵便番号", OrderField::PostalCode),
        ColumnSpec::derived("お届け先住所", delivery_address),
        ColumnSpec::field("お届け先アパートマンション名", OrderField::Address2),
        ColumnSpec::blank("お届け先会社・部門１"),
        ColumnSpec::blank("お届け先会社・部門２"),
        ColumnSpec::derived("お届け先名", derived::recipient_name),
        ColumnSpec::blank("お届け先名(ｶﾅ)"),
        ColumnSpec::blank("敬称"),
        ColumnSpec::blank("ご依頼主コード"),
        ColumnSpec::constant("ご依頼主電話番号", &shipper.phone),
        ColumnSpec::blank("ご依頼主電話番号枝番"),
        ColumnSpec::constant("ご依頼主郵便番号", &shipper.postal_code),
        ColumnSpec::constant("ご依頼主住所", &shipper.address),
        ColumnSpec::constant("ご依頼主アパートマンション名", &shipper.building),
        ColumnSpec::constant("ご依頼主名", &shipper.name),
        ColumnSpec::blank("ご依頼主名(カナ)"),
        ColumnSpec::blank("品目コード１"),
        ColumnSpec::constant("品名１", &shipper.item_category),
        ColumnSpec::blank("品名２"),
        ColumnSpec::blank("荷扱い1"),
        ColumnSpec::blank("荷扱い2"),
        ColumnSpec::blank("記事"),
        ColumnSpec::blank("ｺﾚｸﾄ代金引換額（税込)"),
        ColumnSpec::blank("内消費税額等"),
        ColumnSpec::blank("止置き"),
        ColumnSpec::blank("営業所コード"),
        ColumnSpec::blank("発行枚数"),
        ColumnSpec::blank("個数口表示フラグ"),
        ColumnSpec::blank("請求先顧客コード"),
        ColumnSpec::constant("請求先分類コード", &shipper.billing_code),
        ColumnSpec::blank("運賃管理番号"),
        ColumnSpec::constant("クロネコwebコレクトデータ登録", &shipper.web_collect_flag),
        ColumnSpec::blank("クロネコwebコレクト加盟店番号"),
        ColumnSpec::blank("クロネコwebコレクト申込受付番号１"),
        ColumnSpec::blank("クロネコwebコレクト申込受付番号２"),
        ColumnSpec::blank("クロネコwebコレクト申込受付番号３"),
        ColumnSpec::blank("お届け予定ｅメール利用区分"),
        ColumnSpec::blank("お届け予定ｅメールe-mailアドレス"),
        ColumnSpec::blank("入力機種"),
        ColumnSpec::blank("お届け予定ｅメールメッセージ"),
        ColumnSpec::blank("お届け完了ｅメール利用区分"),
        ColumnSpec::blank("お届け完了ｅメールe-mailアドレス"),
        ColumnSpec::blank("お届け完了ｅメールメッセージ"),
        ColumnSpec::blank("クロネコ収納代行利用区分"),
        ColumnSpec::blank("予備"),
        ColumnSpec::blank("収納代行請求金額(税込)"),
        ColumnSpec::blank("収納代行内消費税額等"),
        ColumnSpec::blank("収納代行請求先郵便番号"),
        ColumnSpec::blank("収納代行請求先住所"),
        ColumnSpec::blank("収納代行請求先住所（アパートマンション名）"),
        ColumnSpec::blank("収納代行請求先会社・部門名１"),
        ColumnSpec::blank("収納代行請求先会社・部門名２"),
        ColumnSpec::blank("収納代行請求先名(漢字)"),
        ColumnSpec::blank("収納代行請求先名(カナ)"),
        ColumnSpec::blank("収納代行問合せ先名(漢字)"),
        ColumnSpec::blank("収納代行問合せ先郵便番号"),
        ColumnSpec::blank("収納代行問合せ先住所"),
        ColumnSpec::blank("収納代行問合せ先住所（アパートマンション名）"),
        ColumnSpec::blank("収納代行問合せ先電話番号"),
        ColumnSpec::blank("収納代行管理番号"),
        ColumnSpec::blank("収納代行品名"),
        ColumnSpec::blank("収納代行備考"),
        ColumnSpec::blank("複数口くくりキー"),
        ColumnSpec::blank("検索キータイトル1"),
        ColumnSpec::blank("検索キー1"),
        ColumnSpec::blank("検索キータイトル2"),
        ColumnSpec::blank("検索キー2"),
        ColumnSpec::blank("検索キータイトル3"),
        ColumnSpec::blank("検索キー3"),
        ColumnSpec::blank("検索キータイトル4"),
        ColumnSpec::blank("検索キー4"),
        ColumnSpec::blank("検索キータイトル5"),
        ColumnSpec::blank("検索キー5"),
        ColumnSpec::blank("予備"),
        ColumnSpec::blank("予備"),
        ColumnSpec::blank("投函予定メール利用区分"),
        ColumnSpec::blank("投函予定メールe-mailアドレス"),
        ColumnSpec::blank("投函予定メールメッセージ"),
        ColumnSpec::blank("予備"),
        ColumnSpec::blank("投函完了メール（お届け先宛）利用区分"),
        ColumnSpec::blank("投函完了メール（お届け先宛）e-mailアドレス"),
        ColumnSpec::blank("投函完了メール（お届け先宛）メールメッセージ"),
        ColumnSpec::blank("投函完了メール（ご依頼主宛）利用区分"),
        ColumnSpec::blank("投函完了メール（ご依頼主宛）e-mailアドレス"),
        ColumnSpec::blank("投函完了メール（ご依頼主宛）メールメッセージ"),
    ];

    CarrierProfile::new(PROFILE_NAME, YAMATO_WIDTH, true, columns)
}
