// Diacritic and ligature folding table: source code point to ASCII target
//
// Entries are matched on their UTF-8 encoding. An empty target deletes the
// character (combining marks). When a code point appears twice, the first
// entry wins.

pub(crate) static FOLDING: &[(char, &str)] = &[
    ('\u{00C1}', "A"),
    ('\u{0102}', "A"),
    ('\u{1EAE}', "A"),
    ('\u{1EB6}', "A"),
    ('\u{1EB0}', "A"),
    ('\u{1EB2}', "A"),
    ('\u{1EB4}', "A"),
    ('\u{01CD}', "A"),
    ('\u{00C2}', "A"),
    ('\u{1EA4}', "A"),
    ('\u{1EAC}', "A"),
    ('\u{1EA6}', "A"),
    ('\u{1EA8}', "A"),
    ('\u{1EAA}', "A"),
    ('\u{00C4}', "A"),
    ('\u{01DE}', "A"),
    ('\u{0226}', "A"),
    ('\u{01E0}', "A"),
    ('\u{1EA0}', "A"),
    ('\u{0200}', "A"),
    ('\u{00C0}', "A"),
    ('\u{1EA2}', "A"),
    ('\u{0202}', "A"),
    ('\u{0100}', "A"),
    ('\u{0104}', "A"),
    ('\u{00C5}', "A"),
    ('\u{01FA}', "A"),
    ('\u{1E00}', "A"),
    ('\u{023A}', "A"),
    ('\u{00C3}', "A"),
    ('\u{A732}', "AA"),
    ('\u{00C6}', "AE"),
    ('\u{01FC}', "AE"),
    ('\u{01E2}', "AE"),
    ('\u{A734}', "AO"),
    ('\u{A736}', "AU"),
    ('\u{A738}', "AV"),
    ('\u{A73A}', "AV"),
    ('\u{A73C}', "AY"),
    ('\u{1E02}', "B"),
    ('\u{1E04}', "B"),
    ('\u{0181}', "B"),
    ('\u{1E06}', "B"),
    ('\u{0243}', "B"),
    ('\u{0182}', "B"),
    ('\u{0106}', "C"),
    ('\u{010C}', "C"),
    ('\u{00C7}', "C"),
    ('\u{1E08}', "C"),
    ('\u{0108}', "C"),
    ('\u{010A}', "C"),
    ('\u{0187}', "C"),
    ('\u{023B}', "C"),
    ('\u{010E}', "D"),
    ('\u{1E10}', "D"),
    ('\u{1E12}', "D"),
    ('\u{1E0A}', "D"),
    ('\u{1E0C}', "D"),
    ('\u{018A}', "D"),
    ('\u{1E0E}', "D"),
    ('\u{01F2}', "DZ"),
    ('\u{01C5}', "DZ"),
    ('\u{0110}', "D"),
    ('\u{018B}', "D"),
    ('\u{01F1}', "DZ"),
    ('\u{01C4}', "DZ"),
    ('\u{00C9}', "E"),
    ('\u{0114}', "E"),
    ('\u{011A}', "E"),
    ('\u{0228}', "E"),
    ('\u{1E1C}', "E"),
    ('\u{00CA}', "E"),
    ('\u{1EBE}', "E"),
    ('\u{1EC6}', "E"),
    ('\u{1EC0}', "E"),
    ('\u{1EC2}', "E"),
    ('\u{1EC4}', "E"),
    ('\u{1E18}', "E"),
    ('\u{00CB}', "E"),
    ('\u{0116}', "E"),
    ('\u{1EB8}', "E"),
    ('\u{0204}', "E"),
    ('\u{00C8}', "E"),
    ('\u{1EBA}', "E"),
    ('\u{0206}', "E"),
    ('\u{0112}', "E"),
    ('\u{1E16}', "E"),
    ('\u{1E14}', "E"),
    ('\u{0118}', "E"),
    ('\u{0246}', "E"),
    ('\u{1EBC}', "E"),
    ('\u{1E1A}', "E"),
    ('\u{A76A}', "ET"),
    ('\u{1E1E}', "F"),
    ('\u{0191}', "F"),
    ('\u{01F4}', "G"),
    ('\u{011E}', "G"),
    ('\u{01E6}', "G"),
    ('\u{0122}', "G"),
    ('\u{011C}', "G"),
    ('\u{0120}', "G"),
    ('\u{0193}', "G"),
    ('\u{1E20}', "G"),
    ('\u{01E4}', "G"),
    ('\u{1E2A}', "H"),
    ('\u{021E}', "H"),
    ('\u{1E28}', "H"),
    ('\u{0124}', "H"),
    ('\u{2C67}', "H"),
    ('\u{1E26}', "H"),
    ('\u{1E22}', "H"),
    ('\u{1E24}', "H"),
    ('\u{0126}', "H"),
    ('\u{00CD}', "I"),
    ('\u{012C}', "I"),
    ('\u{01CF}', "I"),
    ('\u{00CE}', "I"),
    ('\u{00CF}', "I"),
    ('\u{1E2E}', "I"),
    ('\u{0130}', "I"),
    ('\u{1ECA}', "I"),
    ('\u{0208}', "I"),
    ('\u{00CC}', "I"),
    ('\u{1EC8}', "I"),
    ('\u{020A}', "I"),
    ('\u{012A}', "I"),
    ('\u{012E}', "I"),
    ('\u{0197}', "I"),
    ('\u{0128}', "I"),
    ('\u{1E2C}', "I"),
    ('\u{A779}', "D"),
    ('\u{A77B}', "F"),
    ('\u{A77D}', "G"),
    ('\u{A782}', "R"),
    ('\u{A784}', "S"),
    ('\u{A786}', "T"),
    ('\u{A76C}', "IS"),
    ('\u{0134}', "J"),
    ('\u{0248}', "J"),
    ('\u{1E30}', "K"),
    ('\u{01E8}', "K"),
    ('\u{0136}', "K"),
    ('\u{2C69}', "K"),
    ('\u{A742}', "K"),
    ('\u{1E32}', "K"),
    ('\u{0198}', "K"),
    ('\u{1E34}', "K"),
    ('\u{A740}', "K"),
    ('\u{A744}', "K"),
    ('\u{0139}', "L"),
    ('\u{023D}', "L"),
    ('\u{013D}', "L"),
    ('\u{013B}', "L"),
    ('\u{1E3C}', "L"),
    ('\u{1E36}', "L"),
    ('\u{1E38}', "L"),
    ('\u{2C60}', "L"),
    ('\u{A748}', "L"),
    ('\u{1E3A}', "L"),
    ('\u{013F}', "L"),
    ('\u{2C62}', "L"),
    ('\u{01C8}', "L"),
    ('\u{0141}', "L"),
    ('\u{01C7}', "LJ"),
    ('\u{1E3E}', "M"),
    ('\u{1E40}', "M"),
    ('\u{1E42}', "M"),
    ('\u{2C6E}', "M"),
    ('\u{0143}', "N"),
    ('\u{0147}', "N"),
    ('\u{0145}', "N"),
    ('\u{1E4A}', "N"),
    ('\u{1E44}', "N"),
    ('\u{1E46}', "N"),
    ('\u{01F8}', "N"),
    ('\u{019D}', "N"),
    ('\u{1E48}', "N"),
    ('\u{0220}', "N"),
    ('\u{01CB}', "N"),
    ('\u{00D1}', "N"),
    ('\u{01CA}', "NJ"),
    ('\u{00D3}', "O"),
    ('\u{014E}', "O"),
    ('\u{01D1}', "O"),
    ('\u{00D4}', "O"),
    ('\u{1ED0}', "O"),
    ('\u{1ED8}', "O"),
    ('\u{1ED2}', "O"),
    ('\u{1ED4}', "O"),
    ('\u{1ED6}', "O"),
    ('\u{00D6}', "O"),
    ('\u{022A}', "O"),
    ('\u{022E}', "O"),
    ('\u{0230}', "O"),
    ('\u{1ECC}', "O"),
    ('\u{0150}', "O"),
    ('\u{020C}', "O"),
    ('\u{00D2}', "O"),
    ('\u{1ECE}', "O"),
    ('\u{01A0}', "O"),
    ('\u{1EDA}', "O"),
    ('\u{1EE2}', "O"),
    ('\u{1EDC}', "O"),
    ('\u{1EDE}', "O"),
    ('\u{1EE0}', "O"),
    ('\u{020E}', "O"),
    ('\u{A74A}', "O"),
    ('\u{A74C}', "O"),
    ('\u{014C}', "O"),
    ('\u{1E52}', "O"),
    ('\u{1E50}', "O"),
    ('\u{019F}', "O"),
    ('\u{01EA}', "O"),
    ('\u{01EC}', "O"),
    ('\u{00D8}', "O"),
    ('\u{01FE}', "O"),
    ('\u{00D5}', "O"),
    ('\u{1E4C}', "O"),
    ('\u{1E4E}', "O"),
    ('\u{022C}', "O"),
    ('\u{01A2}', "OI"),
    ('\u{A74E}', "OO"),
    ('\u{0190}', "E"),
    ('\u{0186}', "O"),
    ('\u{0222}', "OU"),
    ('\u{1E54}', "P"),
    ('\u{1E56}', "P"),
    ('\u{A752}', "P"),
    ('\u{01A4}', "P"),
    ('\u{A754}', "P"),
    ('\u{2C63}', "P"),
    ('\u{A750}', "P"),
    ('\u{A758}', "Q"),
    ('\u{A756}', "Q"),
    ('\u{0154}', "R"),
    ('\u{0158}', "R"),
    ('\u{0156}', "R"),
    ('\u{1E58}', "R"),
    ('\u{1E5A}', "R"),
    ('\u{1E5C}', "R"),
    ('\u{0210}', "R"),
    ('\u{0212}', "R"),
    ('\u{1E5E}', "R"),
    ('\u{024C}', "R"),
    ('\u{2C64}', "R"),
    ('\u{A73E}', "C"),
    ('\u{018E}', "E"),
    ('\u{015A}', "S"),
    ('\u{1E64}', "S"),
    ('\u{0160}', "S"),
    ('\u{1E66}', "S"),
    ('\u{015E}', "S"),
    ('\u{015C}', "S"),
    ('\u{0218}', "S"),
    ('\u{1E60}', "S"),
    ('\u{1E62}', "S"),
    ('\u{1E68}', "S"),
    ('\u{1E9E}', "SS"),
    ('\u{0164}', "T"),
    ('\u{0162}', "T"),
    ('\u{1E70}', "T"),
    ('\u{021A}', "T"),
    ('\u{023E}', "T"),
    ('\u{1E6A}', "T"),
    ('\u{1E6C}', "T"),
    ('\u{01AC}', "T"),
    ('\u{1E6E}', "T"),
    ('\u{01AE}', "T"),
    ('\u{0166}', "T"),
    ('\u{2C6F}', "A"),
    ('\u{A780}', "L"),
    ('\u{019C}', "M"),
    ('\u{0245}', "V"),
    ('\u{A728}', "TZ"),
    ('\u{00DA}', "U"),
    ('\u{016C}', "U"),
    ('\u{01D3}', "U"),
    ('\u{00DB}', "U"),
    ('\u{1E76}', "U"),
    ('\u{00DC}', "U"),
    ('\u{01D7}', "U"),
    ('\u{01D9}', "U"),
    ('\u{01DB}', "U"),
    ('\u{01D5}', "U"),
    ('\u{1E72}', "U"),
    ('\u{1EE4}', "U"),
    ('\u{0170}', "U"),
    ('\u{0214}', "U"),
    ('\u{00D9}', "U"),
    ('\u{1EE6}', "U"),
    ('\u{01AF}', "U"),
    ('\u{1EE8}', "U"),
    ('\u{1EF0}', "U"),
    ('\u{1EEA}', "U"),
    ('\u{1EEC}', "U"),
    ('\u{1EEE}', "U"),
    ('\u{0216}', "U"),
    ('\u{016A}', "U"),
    ('\u{1E7A}', "U"),
    ('\u{0172}', "U"),
    ('\u{016E}', "U"),
    ('\u{0168}', "U"),
    ('\u{1E78}', "U"),
    ('\u{1E74}', "U"),
    ('\u{A75E}', "V"),
    ('\u{1E7E}', "V"),
    ('\u{01B2}', "V"),
    ('\u{1E7C}', "V"),
    ('\u{A760}', "VY"),
    ('\u{1E82}', "W"),
    ('\u{0174}', "W"),
    ('\u{1E84}', "W"),
    ('\u{1E86}', "W"),
    ('\u{1E88}', "W"),
    ('\u{1E80}', "W"),
    ('\u{2C72}', "W"),
    ('\u{1E8C}', "X"),
    ('\u{1E8A}', "X"),
    ('\u{00DD}', "Y"),
    ('\u{0176}', "Y"),
    ('\u{0178}', "Y"),
    ('\u{1E8E}', "Y"),
    ('\u{1EF4}', "Y"),
    ('\u{1EF2}', "Y"),
    ('\u{01B3}', "Y"),
    ('\u{1EF6}', "Y"),
    ('\u{1EFE}', "Y"),
    ('\u{0232}', "Y"),
    ('\u{024E}', "Y"),
    ('\u{1EF8}', "Y"),
    ('\u{0179}', "Z"),
    ('\u{017D}', "Z"),
    ('\u{1E90}', "Z"),
    ('\u{2C6B}', "Z"),
    ('\u{017B}', "Z"),
    ('\u{1E92}', "Z"),
    ('\u{0224}', "Z"),
    ('\u{1E94}', "Z"),
    ('\u{01B5}', "Z"),
    ('\u{0132}', "IJ"),
    ('\u{0152}', "OE"),
    ('\u{1D00}', "A"),
    ('\u{1D01}', "AE"),
    ('\u{0299}', "B"),
    ('\u{1D03}', "B"),
    ('\u{1D04}', "C"),
    ('\u{1D05}', "D"),
    ('\u{1D07}', "E"),
    ('\u{A730}', "F"),
    ('\u{0262}', "G"),
    ('\u{029B}', "G"),
    ('\u{029C}', "H"),
    ('\u{026A}', "I"),
    ('\u{0281}', "R"),
    ('\u{1D0A}', "J"),
    ('\u{1D0B}', "K"),
    ('\u{029F}', "L"),
    ('\u{1D0C}', "L"),
    ('\u{1D0D}', "M"),
    ('\u{0274}', "N"),
    ('\u{1D0F}', "O"),
    ('\u{0276}', "OE"),
    ('\u{1D10}', "O"),
    ('\u{1D15}', "OU"),
    ('\u{1D18}', "P"),
    ('\u{0280}', "R"),
    ('\u{1D0E}', "N"),
    ('\u{1D19}', "R"),
    ('\u{A731}', "S"),
    ('\u{1D1B}', "T"),
    ('\u{2C7B}', "E"),
    ('\u{1D1A}', "R"),
    ('\u{1D1C}', "U"),
    ('\u{1D20}', "V"),
    ('\u{1D21}', "W"),
    ('\u{028F}', "Y"),
    ('\u{1D22}', "Z"),
    ('\u{00E1}', "a"),
    ('\u{0103}', "a"),
    ('\u{1EAF}', "a"),
    ('\u{1EB7}', "a"),
    ('\u{1EB1}', "a"),
    ('\u{1EB3}', "a"),
    ('\u{1EB5}', "a"),
    ('\u{01CE}', "a"),
    ('\u{00E2}', "a"),
    ('\u{1EA5}', "a"),
    ('\u{1EAD}', "a"),
    ('\u{1EA7}', "a"),
    ('\u{1EA9}', "a"),
    ('\u{1EAB}', "a"),
    ('\u{00E4}', "a"),
    ('\u{01DF}', "a"),
    ('\u{0227}', "a"),
    ('\u{01E1}', "a"),
    ('\u{1EA1}', "a"),
    ('\u{0201}', "a"),
    ('\u{00E0}', "a"),
    ('\u{1EA3}', "a"),
    ('\u{0203}', "a"),
    ('\u{0101}', "a"),
    ('\u{0105}', "a"),
    ('\u{1D8F}', "a"),
    ('\u{1E9A}', "a"),
    ('\u{00E5}', "a"),
    ('\u{01FB}', "a"),
    ('\u{1E01}', "a"),
    ('\u{2C65}', "a"),
    ('\u{00E3}', "a"),
    ('\u{A733}', "aa"),
    ('\u{00E6}', "ae"),
    ('\u{01FD}', "ae"),
    ('\u{01E3}', "ae"),
    ('\u{A735}', "ao"),
    ('\u{A737}', "au"),
    ('\u{A739}', "av"),
    ('\u{A73B}', "av"),
    ('\u{A73D}', "ay"),
    ('\u{1E03}', "b"),
    ('\u{1E05}', "b"),
    ('\u{0253}', "b"),
    ('\u{1E07}', "b"),
    ('\u{1D6C}', "b"),
    ('\u{1D80}', "b"),
    ('\u{0180}', "b"),
    ('\u{0183}', "b"),
    ('\u{0275}', "o"),
    ('\u{0107}', "c"),
    ('\u{010D}', "c"),
    ('\u{00E7}', "c"),
    ('\u{1E09}', "c"),
    ('\u{0109}', "c"),
    ('\u{0255}', "c"),
    ('\u{010B}', "c"),
    ('\u{0188}', "c"),
    ('\u{023C}', "c"),
    ('\u{010F}', "d"),
    ('\u{1E11}', "d"),
    ('\u{1E13}', "d"),
    ('\u{0221}', "d"),
    ('\u{1E0B}', "d"),
    ('\u{1E0D}', "d"),
    ('\u{0257}', "d"),
    ('\u{1D91}', "d"),
    ('\u{1E0F}', "d"),
    ('\u{1D6D}', "d"),
    ('\u{1D81}', "d"),
    ('\u{0111}', "d"),
    ('\u{0256}', "d"),
    ('\u{018C}', "d"),
    ('\u{0131}', "i"),
    ('\u{0237}', "j"),
    ('\u{025F}', "j"),
    ('\u{0284}', "j"),
    ('\u{01F3}', "dz"),
    ('\u{01C6}', "dz"),
    ('\u{00E9}', "e"),
    ('\u{0115}', "e"),
    ('\u{011B}', "e"),
    ('\u{0229}', "e"),
    ('\u{1E1D}', "e"),
    ('\u{00EA}', "e"),
    ('\u{1EBF}', "e"),
    ('\u{1EC7}', "e"),
    ('\u{1EC1}', "e"),
    ('\u{1EC3}', "e"),
    ('\u{1EC5}', "e"),
    ('\u{1E19}', "e"),
    ('\u{00EB}', "e"),
    ('\u{0117}', "e"),
    ('\u{1EB9}', "e"),
    ('\u{0205}', "e"),
    ('\u{00E8}', "e"),
    ('\u{1EBB}', "e"),
    ('\u{0207}', "e"),
    ('\u{0113}', "e"),
    ('\u{1E17}', "e"),
    ('\u{1E15}', "e"),
    ('\u{2C78}', "e"),
    ('\u{0119}', "e"),
    ('\u{1D92}', "e"),
    ('\u{0247}', "e"),
    ('\u{1EBD}', "e"),
    ('\u{1E1B}', "e"),
    ('\u{A76B}', "et"),
    ('\u{1E1F}', "f"),
    ('\u{0192}', "f"),
    ('\u{1D6E}', "f"),
    ('\u{1D82}', "f"),
    ('\u{01F5}', "g"),
    ('\u{011F}', "g"),
    ('\u{01E7}', "g"),
    ('\u{0123}', "g"),
    ('\u{011D}', "g"),
    ('\u{0121}', "g"),
    ('\u{0260}', "g"),
    ('\u{1E21}', "g"),
    ('\u{1D83}', "g"),
    ('\u{01E5}', "g"),
    ('\u{1E2B}', "h"),
    ('\u{021F}', "h"),
    ('\u{1E29}', "h"),
    ('\u{0125}', "h"),
    ('\u{2C68}', "h"),
    ('\u{1E27}', "h"),
    ('\u{1E23}', "h"),
    ('\u{1E25}', "h"),
    ('\u{0266}', "h"),
    ('\u{1E96}', "h"),
    ('\u{0127}', "h"),
    ('\u{0195}', "hv"),
    ('\u{00ED}', "i"),
    ('\u{012D}', "i"),
    ('\u{01D0}', "i"),
    ('\u{00EE}', "i"),
    ('\u{00EF}', "i"),
    ('\u{1E2F}', "i"),
    ('\u{1ECB}', "i"),
    ('\u{0209}', "i"),
    ('\u{00EC}', "i"),
    ('\u{1EC9}', "i"),
    ('\u{020B}', "i"),
    ('\u{012B}', "i"),
    ('\u{012F}', "i"),
    ('\u{1D96}', "i"),
    ('\u{0268}', "i"),
    ('\u{0129}', "i"),
    ('\u{1E2D}', "i"),
    ('\u{A77A}', "d"),
    ('\u{A77C}', "f"),
    ('\u{1D79}', "g"),
    ('\u{A783}', "r"),
    ('\u{A785}', "s"),
    ('\u{A787}', "t"),
    ('\u{A76D}', "is"),
    ('\u{01F0}', "j"),
    ('\u{0135}', "j"),
    ('\u{029D}', "j"),
    ('\u{0249}', "j"),
    ('\u{1E31}', "k"),
    ('\u{01E9}', "k"),
    ('\u{0137}', "k"),
    ('\u{2C6A}', "k"),
    ('\u{A743}', "k"),
    ('\u{1E33}', "k"),
    ('\u{0199}', "k"),
    ('\u{1E35}', "k"),
    ('\u{1D84}', "k"),
    ('\u{A741}', "k"),
    ('\u{A745}', "k"),
    ('\u{013A}', "l"),
    ('\u{019A}', "l"),
    ('\u{026C}', "l"),
    ('\u{013E}', "l"),
    ('\u{013C}', "l"),
    ('\u{1E3D}', "l"),
    ('\u{0234}', "l"),
    ('\u{1E37}', "l"),
    ('\u{1E39}', "l"),
    ('\u{2C61}', "l"),
    ('\u{A749}', "l"),
    ('\u{1E3B}', "l"),
    ('\u{0140}', "l"),
    ('\u{026B}', "l"),
    ('\u{1D85}', "l"),
    ('\u{026D}', "l"),
    ('\u{0142}', "l"),
    ('\u{01C9}', "lj"),
    ('\u{017F}', "s"),
    ('\u{1E9C}', "s"),
    ('\u{1E9B}', "s"),
    ('\u{1E9D}', "s"),
    ('\u{1E3F}', "m"),
    ('\u{1E41}', "m"),
    ('\u{1E43}', "m"),
    ('\u{0271}', "m"),
    ('\u{1D6F}', "m"),
    ('\u{1D86}', "m"),
    ('\u{0144}', "n"),
    ('\u{0148}', "n"),
    ('\u{0146}', "n"),
    ('\u{1E4B}', "n"),
    ('\u{0235}', "n"),
    ('\u{1E45}', "n"),
    ('\u{1E47}', "n"),
    ('\u{01F9}', "n"),
    ('\u{0272}', "n"),
    ('\u{1E49}', "n"),
    ('\u{019E}', "n"),
    ('\u{1D70}', "n"),
    ('\u{1D87}', "n"),
    ('\u{0273}', "n"),
    ('\u{00F1}', "n"),
    ('\u{01CC}', "nj"),
    ('\u{00F3}', "o"),
    ('\u{014F}', "o"),
    ('\u{01D2}', "o"),
    ('\u{00F4}', "o"),
    ('\u{1ED1}', "o"),
    ('\u{1ED9}', "o"),
    ('\u{1ED3}', "o"),
    ('\u{1ED5}', "o"),
    ('\u{1ED7}', "o"),
    ('\u{00F6}', "o"),
    ('\u{022B}', "o"),
    ('\u{022F}', "o"),
    ('\u{0231}', "o"),
    ('\u{1ECD}', "o"),
    ('\u{0151}', "o"),
    ('\u{020D}', "o"),
    ('\u{00F2}', "o"),
    ('\u{1ECF}', "o"),
    ('\u{01A1}', "o"),
    ('\u{1EDB}', "o"),
    ('\u{1EE3}', "o"),
    ('\u{1EDD}', "o"),
    ('\u{1EDF}', "o"),
    ('\u{1EE1}', "o"),
    ('\u{020F}', "o"),
    ('\u{A74B}', "o"),
    ('\u{A74D}', "o"),
    ('\u{2C7A}', "o"),
    ('\u{014D}', "o"),
    ('\u{1E53}', "o"),
    ('\u{1E51}', "o"),
    ('\u{01EB}', "o"),
    ('\u{01ED}', "o"),
    ('\u{00F8}', "o"),
    ('\u{01FF}', "o"),
    ('\u{00F5}', "o"),
    ('\u{1E4D}', "o"),
    ('\u{1E4F}', "o"),
    ('\u{022D}', "o"),
    ('\u{01A3}', "oi"),
    ('\u{A74F}', "oo"),
    ('\u{025B}', "e"),
    ('\u{1D93}', "e"),
    ('\u{0254}', "o"),
    ('\u{1D97}', "o"),
    ('\u{0223}', "ou"),
    ('\u{1E55}', "p"),
    ('\u{1E57}', "p"),
    ('\u{A753}', "p"),
    ('\u{01A5}', "p"),
    ('\u{1D71}', "p"),
    ('\u{1D88}', "p"),
    ('\u{A755}', "p"),
    ('\u{1D7D}', "p"),
    ('\u{A751}', "p"),
    ('\u{A759}', "q"),
    ('\u{02A0}', "q"),
    ('\u{024B}', "q"),
    ('\u{A757}', "q"),
    ('\u{0155}', "r"),
    ('\u{0159}', "r"),
    ('\u{0157}', "r"),
    ('\u{1E59}', "r"),
    ('\u{1E5B}', "r"),
    ('\u{1E5D}', "r"),
    ('\u{0211}', "r"),
    ('\u{027E}', "r"),
    ('\u{1D73}', "r"),
    ('\u{0213}', "r"),
    ('\u{1E5F}', "r"),
    ('\u{027C}', "r"),
    ('\u{1D72}', "r"),
    ('\u{1D89}', "r"),
    ('\u{024D}', "r"),
    ('\u{027D}', "r"),
    ('\u{2184}', "c"),
    ('\u{A73F}', "c"),
    ('\u{0258}', "e"),
    ('\u{027F}', "r"),
    ('\u{015B}', "s"),
    ('\u{1E65}', "s"),
    ('\u{0161}', "s"),
    ('\u{1E67}', "s"),
    ('\u{015F}', "s"),
    ('\u{015D}', "s"),
    ('\u{0219}', "s"),
    ('\u{1E61}', "s"),
    ('\u{1E63}', "s"),
    ('\u{1E69}', "s"),
    ('\u{0282}', "s"),
    ('\u{1D74}', "s"),
    ('\u{1D8A}', "s"),
    ('\u{023F}', "s"),
    ('\u{0261}', "g"),
    ('\u{00DF}', "ss"),
    ('\u{1D11}', "o"),
    ('\u{1D13}', "o"),
    ('\u{1D1D}', "u"),
    ('\u{0165}', "t"),
    ('\u{0163}', "t"),
    ('\u{1E71}', "t"),
    ('\u{021B}', "t"),
    ('\u{0236}', "t"),
    ('\u{1E97}', "t"),
    ('\u{2C66}', "t"),
    ('\u{1E6B}', "t"),
    ('\u{1E6D}', "t"),
    ('\u{01AD}', "t"),
    ('\u{1E6F}', "t"),
    ('\u{1D75}', "t"),
    ('\u{01AB}', "t"),
    ('\u{0288}', "t"),
    ('\u{0167}', "t"),
    ('\u{1D7A}', "th"),
    ('\u{0250}', "a"),
    ('\u{1D02}', "ae"),
    ('\u{01DD}', "e"),
    ('\u{1D77}', "g"),
    ('\u{0265}', "h"),
    ('\u{02AE}', "h"),
    ('\u{02AF}', "h"),
    ('\u{1D09}', "i"),
    ('\u{029E}', "k"),
    ('\u{A781}', "l"),
    ('\u{026F}', "m"),
    ('\u{0270}', "m"),
    ('\u{1D14}', "oe"),
    ('\u{0279}', "r"),
    ('\u{027B}', "r"),
    ('\u{027A}', "r"),
    ('\u{2C79}', "r"),
    ('\u{0287}', "t"),
    ('\u{028C}', "v"),
    ('\u{028D}', "w"),
    ('\u{028E}', "y"),
    ('\u{A729}', "tz"),
    ('\u{00FA}', "u"),
    ('\u{016D}', "u"),
    ('\u{01D4}', "u"),
    ('\u{00FB}', "u"),
    ('\u{1E77}', "u"),
    ('\u{00FC}', "u"),
    ('\u{01D8}', "u"),
    ('\u{01DA}', "u"),
    ('\u{01DC}', "u"),
    ('\u{01D6}', "u"),
    ('\u{1E73}', "u"),
    ('\u{1EE5}', "u"),
    ('\u{0171}', "u"),
    ('\u{0215}', "u"),
    ('\u{00F9}', "u"),
    ('\u{1EE7}', "u"),
    ('\u{01B0}', "u"),
    ('\u{1EE9}', "u"),
    ('\u{1EF1}', "u"),
    ('\u{1EEB}', "u"),
    ('\u{1EED}', "u"),
    ('\u{1EEF}', "u"),
    ('\u{0217}', "u"),
    ('\u{016B}', "u"),
    ('\u{1E7B}', "u"),
    ('\u{0173}', "u"),
    ('\u{1D99}', "u"),
    ('\u{016F}', "u"),
    ('\u{0169}', "u"),
    ('\u{1E79}', "u"),
    ('\u{1E75}', "u"),
    ('\u{1D6B}', "ue"),
    ('\u{A778}', "um"),
    ('\u{2C74}', "v"),
    ('\u{A75F}', "v"),
    ('\u{1E7F}', "v"),
    ('\u{028B}', "v"),
    ('\u{1D8C}', "v"),
    ('\u{2C71}', "v"),
    ('\u{1E7D}', "v"),
    ('\u{A761}', "vy"),
    ('\u{1E83}', "w"),
    ('\u{0175}', "w"),
    ('\u{1E85}', "w"),
    ('\u{1E87}', "w"),
    ('\u{1E89}', "w"),
    ('\u{1E81}', "w"),
    ('\u{2C73}', "w"),
    ('\u{1E98}', "w"),
    ('\u{1E8D}', "x"),
    ('\u{1E8B}', "x"),
    ('\u{1D8D}', "x"),
    ('\u{00FD}', "y"),
    ('\u{0177}', "y"),
    ('\u{00FF}', "y"),
    ('\u{1E8F}', "y"),
    ('\u{1EF5}', "y"),
    ('\u{1EF3}', "y"),
    ('\u{01B4}', "y"),
    ('\u{1EF7}', "y"),
    ('\u{1EFF}', "y"),
    ('\u{0233}', "y"),
    ('\u{1E99}', "y"),
    ('\u{024F}', "y"),
    ('\u{1EF9}', "y"),
    ('\u{017A}', "z"),
    ('\u{017E}', "z"),
    ('\u{1E91}', "z"),
    ('\u{0291}', "z"),
    ('\u{2C6C}', "z"),
    ('\u{017C}', "z"),
    ('\u{1E93}', "z"),
    ('\u{0225}', "z"),
    ('\u{1E95}', "z"),
    ('\u{1D76}', "z"),
    ('\u{1D8E}', "z"),
    ('\u{0290}', "z"),
    ('\u{01B6}', "z"),
    ('\u{0240}', "z"),
    ('\u{FB00}', "ff"),
    ('\u{FB03}', "ffi"),
    ('\u{FB04}', "ffl"),
    ('\u{FB01}', "fi"),
    ('\u{FB02}', "fl"),
    ('\u{0133}', "ij"),
    ('\u{0153}', "oe"),
    ('\u{FB06}', "st"),
    ('\u{2090}', "a"),
    ('\u{2091}', "e"),
    ('\u{1D62}', "i"),
    ('\u{2C7C}', "j"),
    ('\u{2092}', "o"),
    ('\u{1D63}', "r"),
    ('\u{1D64}', "u"),
    ('\u{1D65}', "v"),
    ('\u{2093}', "x"),
    ('\u{0300}', ""),
    ('\u{0301}', ""),
    ('\u{0302}', ""),
    ('\u{0303}', ""),
    ('\u{0304}', ""),
    ('\u{0306}', ""),
    ('\u{0307}', ""),
    ('\u{0308}', ""),
    ('\u{0309}', ""),
    ('\u{030A}', ""),
    ('\u{030B}', ""),
    ('\u{030C}', ""),
    ('\u{030F}', ""),
    ('\u{0311}', ""),
    ('\u{031B}', ""),
    ('\u{0323}', ""),
    ('\u{0324}', ""),
    ('\u{0325}', ""),
    ('\u{0326}', ""),
    ('\u{0327}', ""),
    ('\u{0328}', ""),
    ('\u{032D}', ""),
    ('\u{032E}', ""),
    ('\u{0330}', ""),
    ('\u{0331}', ""),
];
