//! Point decoding and encoding.

use edwards25519::{
    AffinePoint, CompressedEdwardsY, EdwardsPoint, Error, FieldElement, PointBytes,
    TwistedEdwardsCurve, modulus, num_bigint::BigUint,
};
use hex_literal::hex;
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

const CURVE: TwistedEdwardsCurve = TwistedEdwardsCurve::ED25519;

/// Compressed points and the decimal `x` and `y` they decode to.
const VECTORS: &[(&str, &str, &str)] = &[
    (
        "93b705486da83fd0e864654923104b3f13e5030c198599961b40e7079554cd1a",
        "36342386295235510298682738805067969701306540594271578388800019131093341795154",
        "12122921476001995645148951048614280991245620197289177635264906062452356396947",
    ),
    (
        "d99e220f3d1f5eb5c04e42ddbee8ae2d0037e75493946a763fe02675ef7ab5bb",
        "9867744591134514766234409775134503735789242596068738861666234899385955184391",
        "27007105853956697146464305861539326123893364786296641738920699361975205011161",
    ),
    (
        "ca154ac6139ad2cae9ec879d94372e5af7821babe4ad7a5c22cd9d3d0de0f66e",
        "8863951197340269192337376041401902342332353795528772831140932659547447199346",
        "50190604070244738509034813119806333022537897198145851967099673924731480446410",
    ),
    (
        "f0f885df3d8798d555f068de9df55ddf7a27f58f0d336dfd61e1cfc304786f27",
        "8339559836462603978596729027145828226446692064449465621521670593473565702096",
        "17837149456960605255763291219950880141511042645120227896055409047531143166192",
    ),
    (
        "922d0b01767d878b154c84e01094494e07f3da6ab9bba387679b291e3072ac8c",
        "29728756164057466625373568465365040229184642524788769390912342380714041647917",
        "5732439974478537809704164552372620509962380634847718181010306158958698245522",
    ),
    (
        "e5bdeac8692566ac8a6cf96e13770ade7d6bf5667993ae552697f69b5fae234f",
        "5247803078767242740120044464502520510114546116496825950704226666451120706898",
        "35795758166829409697614900371676186086497347493565110137245013968556439289317",
    ),
    (
        "b0b004306bc71b81a8f5293294dd215dbe671b3ccc2f65aeec55f3b66769e013",
        "10312254716733560945112340752820087022543905959376848337636391802511748824290",
        "8990445345100278755573999342509674697246053177021827054216677883598688530608",
    ),
    (
        "6bb2ceb3d6d898efb79b74150c7a9543d409135c9035ee14ef87e8ce04aba244",
        "46187074130971894401027452608625709634897048832286753671143953908951013512232",
        "31044683256411290311212662226177158013678758257007005486276334971220422210155",
    ),
    (
        "d8c9ab6c8793e53e075a8f138d36a78e20ac045a7138b0af41bf67eef07bc516",
        "43298306190744565974608750041314720022353418826989995191299464722462576232438",
        "10299806950888062109594010166977096938659134029833804788802662958447110900184",
    ),
    (
        "6cbe9bd0c6856a79551a961bdfa6ea72be67dbbb808b832138ec2c424d5f8043",
        "35177667294466130792822128181665344626291492152827341114635509442932953019866",
        "30531775028158411079331658342927130455577264409965572072859069219355146042988",
    ),
    (
        "89922d4d6e62a2e8cab805be279c92269ac652c587d7f9de0430ceb252a12611",
        "12820030077079649627381856993531600576978343439982308457445080796710826231022",
        "7757572025084975759300023165620534427770353848949097085637555522219082093193",
    ),
    (
        "5c669fa7f42df778231772ad6e8ab8be5de2e329c8a186b280935f1b0f32a1db",
        "6253646343597756905184377893871320831940235673155211271443761113605327600367",
        "41445277093105850390510771498467355081794651394064157691875599960362497042012",
    ),
    (
        "739e5b71592ecec6d2d5f8fcefd9303bd2645f80a7c242a93a91e7ac68ca4795",
        "7883813891724379909500855090045877805808146475175203491545972088683421931929",
        "9625412936653339950207538235022617556749363084431208115356480470265838149235",
    ),
    (
        "b1dff78ebe5d0ff5f88e4245276e4d3fe038ef9855e440b9c04e13a99bb7bef8",
        "30472579368937623878795928292319870424238956006962946855422794723907421586575",
        "54614509988478775698488822370961131128905799111181845080982179012590555357105",
    ),
    (
        "e9ed5513b18f1c2c905ec6bab764eb8226223dd443799cf429e16516a4b0ba80",
        "15271018800918349528867796761843695077240549771140699068489160957947655924037",
        "329852685195849268433605954815805257694947917358254381826586710001214418409",
    ),
    (
        "e9221bf1a64bf2fe52784c86ae51ad4e28448f42584a7a87cc3d1490703c92cd",
        "44743338070477741089168018355702098581358101466058181816723771301716592216675",
        "35086466151837287001694223052259529322710394149012611361861324849922889687785",
    ),
    (
        "de021753b8b47f50e2418718c094e189a05bf7711297f1b1c8749a3be4b9a534",
        "33866163499212710724609220769105485277006407915382983357866153206133156045778",
        "23813080868237246772939037708015963565770032179485293012321274959431634191070",
    ),
    (
        "064437ea0355acebb6d3f2129dd6a8fa826b5ce92b9dbd2e02aba443ac90614f",
        "5348533591149396191276147118693530904680789144057002981668376686342174347878",
        "35905097699069976581306974641271357218166789408723537731985392719990711862278",
    ),
    (
        "0575769b2c4afb22b3ed5af6142163d1c4289a6d86a5c07caf4ede226fe32b24",
        "40315256029575331481422442140599294662819295345876862444982990842463168911950",
        "16360806665429931881693966663841946038395457300165162458665310950478612690181",
    ),
    (
        "41bd4469274c4545b3e2161e9e101333e9aa45bbc2a31fea0e311fb4a25d95ae",
        "33052698717932927149892248178127960767761537730607492185123959981890223827545",
        "21070297496372888725360520588353008051332970094494783807974486544208068132161",
    ),
    (
        "6b4d91a03c7fb93f64a9db518cef7a0c0f7cc164acc2d123e6ddb0005a930530",
        "6067545198628916284979302752626014258394465463054351058202959902440244027330",
        "21720867950501615598443412609276369354182820943208835740764942235573960133995",
    ),
    (
        "94b726790c79d5dea2e759c070aa7ca521fc7663f51736d2412487b24a64ae64",
        "53831317569733935553511538902125979694724978323896080664568625466675599453432",
        "45539408436069992094954340278746828493900701575877952467788933528780603307924",
    ),
    (
        "d1f93eaec626854144cdf80abe20facfad72a11159aebce2b4a49482cbeb0da3",
        "19525710214064978105626553978754569373727482210041238185590766077238636555711",
        "15855546109268858062231319627174169988469689010275059374409951265691262712273",
    ),
    (
        "c73ea149472644acbdfc18b99e6e9ac215fdea556581b183a2bbf4a61e554122",
        "11088014282687820959360741441437463809117498610356719851510129751795115755562",
        "15494069385862047111068018000831027592461304482419340631336168046873859407559",
    ),
    (
        "14c723f67789d320bfcccc0ff2bc8495b57b1d359d5b493aaf22df43bb65b259",
        "3780609302167966527808115014787075050391511873602293238860225507873910096878",
        "40571044426480029736683329118811835506584488408510318455853674070731785488148",
    ),
];

fn decode_hex(s: &str) -> PointBytes {
    hex::decode(s).unwrap().try_into().unwrap()
}

fn integer(decimal: &str) -> BigUint {
    BigUint::parse_bytes(decimal.as_bytes(), 10).unwrap()
}

/// Checks `-x^2 + y^2 = 1 + d x^2 y^2` with big integer arithmetic.
fn satisfies_curve_equation(point: &AffinePoint) -> bool {
    let p = modulus();
    let x = point.x().to_biguint();
    let y = point.y().to_biguint();
    let d = CURVE.d.to_biguint();

    let xx = &x * &x % &p;
    let yy = &y * &y % &p;
    let lhs = (&yy + &p - &xx) % &p;
    let rhs = (BigUint::from(1u8) + d * &xx % &p * &yy) % &p;
    lhs == rhs
}

#[test]
fn vectors_decode() {
    for &(encoded, x, y) in VECTORS {
        let bytes = decode_hex(encoded);
        let point = CURVE.decode_point(&bytes).unwrap();

        assert_eq!(point.x().to_biguint(), integer(x), "{encoded}");
        assert_eq!(point.y().to_biguint(), integer(y), "{encoded}");
        assert_eq!(CURVE.encode_point(&point), bytes, "{encoded}");
        assert!(satisfies_curve_equation(&point), "{encoded}");
        assert!(bool::from(CURVE.is_on_curve(&point)), "{encoded}");
    }
}

#[test]
fn vectors_via_compressed() {
    for &(encoded, _, _) in VECTORS {
        let compressed = CompressedEdwardsY::try_from(&decode_hex(encoded)[..]).unwrap();
        let point = compressed.decompress().unwrap();
        assert_eq!(point.compress(), compressed);
        assert_eq!(point.to_edwards().compress(), compressed);
        assert_eq!(format!("{compressed}"), encoded);
    }
}

#[test]
fn vectors_sign_bit_selects_root() {
    for &(encoded, _, _) in VECTORS {
        let mut bytes = decode_hex(encoded);
        let point = CURVE.decode_point(&bytes).unwrap();

        bytes[31] ^= 0x80;
        let flipped = CURVE.decode_point(&bytes).unwrap();
        assert_eq!(flipped, point.negate());
        assert_eq!(flipped.y(), point.y());
    }
}

#[test]
fn random_encodings_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(54321);
    let mut bytes = [0u8; 32];

    let mut valid = 0usize;
    let mut not_on_curve = 0usize;
    let total = 10_000usize;
    for _ in 0..total {
        rng.fill_bytes(&mut bytes);
        match CURVE.decode_point(&bytes) {
            Ok(point) => {
                valid += 1;
                assert_eq!(CURVE.encode_point(&point), bytes);
                assert!(satisfies_curve_equation(&point));
            }
            Err(Error::NotOnCurve) => not_on_curve += 1,
            Err(err) => panic!("unexpected error {err} for {}", hex::encode(bytes)),
        }
    }

    // Roughly half of all y have a matching x.
    assert_eq!(valid + not_on_curve, total);
    assert!(valid > total * 45 / 100, "{valid} of {total} valid");
    assert!(valid < total * 55 / 100, "{valid} of {total} valid");
}

#[test]
fn decoding_is_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let mut bytes = [0u8; 32];
    for _ in 0..100 {
        rng.fill_bytes(&mut bytes);
        let first = CURVE.decode_point(&bytes);
        let second = CURVE.decode_point(&bytes);
        assert_eq!(first, second);
        if let (Ok(a), Ok(b)) = (first, second) {
            assert_eq!(a.x().to_bytes(), b.x().to_bytes());
            assert_eq!(a.y().to_bytes(), b.y().to_bytes());
        }
    }
}

#[test]
fn non_canonical_encodings_are_rejected() {
    // y = p + 1, an alias of the identity
    let bytes = hex!("eeffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
    assert_eq!(CURVE.decode_point(&bytes), Err(Error::NonCanonicalEncoding));

    // (0, 1) with the sign bit set
    let bytes = hex!("0100000000000000000000000000000000000000000000000000000000000080");
    assert_eq!(CURVE.decode_point(&bytes), Err(Error::NonCanonicalEncoding));

    // (0, -1) with the sign bit set
    let bytes = hex!("ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");
    assert_eq!(CURVE.decode_point(&bytes), Err(Error::NonCanonicalEncoding));
}

#[test]
fn invalid_length_is_rejected() {
    let bytes = decode_hex(VECTORS[0].0);
    assert_eq!(
        CURVE.decode_point_slice(&bytes[..]).map(|p| p.compress()),
        Ok(CompressedEdwardsY(bytes))
    );
    assert_eq!(CURVE.decode_point_slice(&[]), Err(Error::InvalidLength));
    assert_eq!(CURVE.decode_point_slice(&bytes[..16]), Err(Error::InvalidLength));
    assert_eq!(
        CompressedEdwardsY::try_from(&[0u8; 64][..]),
        Err(Error::InvalidLength)
    );
}

#[test]
fn projective_to_affine() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for &(encoded, _, _) in VECTORS {
        let point = CURVE.decode_point(&decode_hex(encoded)).unwrap();

        let mut z_bytes = [0u8; 32];
        rng.fill_bytes(&mut z_bytes);
        z_bytes[31] &= 0x7f;
        let z = FieldElement::from_bytes(&z_bytes);

        let x = point.x() * z;
        let y = point.y() * z;
        let t = point.x() * point.y() * z;
        let extended = EdwardsPoint::new(x, y, z, t).unwrap();

        assert!(bool::from(CURVE.is_on_curve_extended(&extended)));
        assert_eq!(CURVE.projective_to_affine(&extended), point);
        assert_eq!(extended, EdwardsPoint::from(point));
    }
}
