// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::CallingCodeEntry;

/// Calling codes offered out of the box, in declaration order.
///
/// Order is significant: when several entries match a number equally well
/// and none of them is preferred, the one declared last wins.
pub static DEFAULT_CALLING_CODES: &[CallingCodeEntry] = &[
    CallingCodeEntry::from_static("Afghanistan", 93, "AF", &[]),
    CallingCodeEntry::from_static("Aland Islands", 358, "AX", &[18]),
    CallingCodeEntry::from_static("Albania", 355, "AL", &[]),
    CallingCodeEntry::from_static("Algeria", 213, "DZ", &[]),
    CallingCodeEntry::from_static("American Samoa", 1, "AS", &[684]),
    CallingCodeEntry::from_static("Andorra", 376, "AD", &[]),
    CallingCodeEntry::from_static("Angola", 244, "AO", &[]),
    CallingCodeEntry::from_static("Anguilla", 1, "AI", &[264]),
    CallingCodeEntry::from_static("Antigua and Barbuda", 1, "AG", &[268]),
    CallingCodeEntry::from_static("Argentina", 54, "AR", &[]),
    CallingCodeEntry::from_static("Armenia", 374, "AM", &[]),
    CallingCodeEntry::from_static("Aruba", 297, "AW", &[]),
    CallingCodeEntry::from_static("Australia", 61, "AU", &[]),
    CallingCodeEntry::from_static("Australia Antarctic Territories", 672, "AQ", &[1]),
    CallingCodeEntry::from_static("Austria", 43, "AT", &[]),
    CallingCodeEntry::from_static("Azerbaijan", 994, "AZ", &[]),
    CallingCodeEntry::from_static("Bahamas", 1, "BS", &[242]),
    CallingCodeEntry::from_static("Bahrain", 973, "BH", &[]),
    CallingCodeEntry::from_static("Bangladesh", 880, "BD", &[]),
    CallingCodeEntry::from_static("Barbados", 1, "BB", &[246]),
    CallingCodeEntry::from_static("Belarus", 375, "BY", &[]),
    CallingCodeEntry::from_static("Belgium", 32, "BE", &[]),
    CallingCodeEntry::from_static("Belize", 501, "BZ", &[]),
    CallingCodeEntry::from_static("Benin", 229, "BJ", &[]),
    CallingCodeEntry::from_static("Bermuda", 1, "BM", &[441]),
    CallingCodeEntry::from_static("Bhutan", 975, "BT", &[]),
    CallingCodeEntry::from_static("Bolivia", 591, "BO", &[]),
    CallingCodeEntry::from_static("Bonaire", 599, "BQ", &[7]),
    CallingCodeEntry::from_static("Bosnia and Herzegovina", 387, "BA", &[]),
    CallingCodeEntry::from_static("Botswana", 267, "BW", &[]),
    CallingCodeEntry::from_static("Brazil", 55, "BR", &[]),
    CallingCodeEntry::from_static("British Indian Ocean Territory", 246, "IO", &[]),
    CallingCodeEntry::from_static("British Virgin Islands", 1, "VG", &[284]),
    CallingCodeEntry::from_static("Brunei", 673, "BN", &[]),
    CallingCodeEntry::from_static("Bulgaria", 359, "BG", &[]),
    CallingCodeEntry::from_static("Burkina Faso", 226, "BF", &[]),
    CallingCodeEntry::from_static("Burundi", 257, "BI", &[]),
    CallingCodeEntry::from_static("Cambodia", 855, "KH", &[]),
    CallingCodeEntry::from_static("Cameroon", 237, "CM", &[]),
    CallingCodeEntry::from_static("Canada", 1, "CA", &[]),
    CallingCodeEntry::from_static("Cape Verde", 238, "CV", &[]),
    CallingCodeEntry::from_static("Cayman Islands", 1, "KY", &[345]),
    CallingCodeEntry::from_static("Central African Republic", 236, "CF", &[]),
    CallingCodeEntry::from_static("Chad", 235, "TD", &[]),
    CallingCodeEntry::from_static("Chile", 56, "CL", &[]),
    CallingCodeEntry::from_static("China", 86, "CN", &[]),
    CallingCodeEntry::from_static("Christmas Island", 61, "CX", &[89164]),
    CallingCodeEntry::from_static("Cocos Islands", 61, "CC", &[89162]),
    CallingCodeEntry::from_static("Colombia", 57, "CO", &[]),
    CallingCodeEntry::from_static("Comoros", 269, "KM", &[]),
    CallingCodeEntry::from_static("Congo", 242, "CG", &[]),
    CallingCodeEntry::from_static("Cook Islands", 682, "CK", &[]),
    CallingCodeEntry::from_static("Costa Rica", 506, "CR", &[]),
    CallingCodeEntry::from_static("Croatia", 385, "HR", &[]),
    CallingCodeEntry::from_static("Cuba", 53, "CU", &[]),
    CallingCodeEntry::from_static("Curacao", 599, "CW", &[9]),
    CallingCodeEntry::from_static("Cyprus", 357, "CY", &[]),
    CallingCodeEntry::from_static("Czech Republic", 420, "CZ", &[]),
    CallingCodeEntry::from_static("Democratic Republic of the Congo", 243, "CD", &[]),
    CallingCodeEntry::from_static("Denmark", 45, "DK", &[]),
    CallingCodeEntry::from_static("Djibouti", 253, "DJ", &[]),
    CallingCodeEntry::from_static("Dominica", 1, "DM", &[767]),
    CallingCodeEntry::from_static("Dominican Republic", 1, "DO", &[809, 829, 849]),
    CallingCodeEntry::from_static("East Timor", 670, "TL", &[]),
    CallingCodeEntry::from_static("Ecuador", 593, "EC", &[]),
    CallingCodeEntry::from_static("Egypt", 20, "EG", &[]),
    CallingCodeEntry::from_static("El Salvador", 503, "SV", &[]),
    CallingCodeEntry::from_static("Equatorial Guinea", 240, "GQ", &[]),
    CallingCodeEntry::from_static("Eritrea", 291, "ER", &[]),
    CallingCodeEntry::from_static("Estonia", 372, "EE", &[]),
    CallingCodeEntry::from_static("Ethiopia", 251, "ET", &[]),
    CallingCodeEntry::from_static("Falkland Islands", 500, "FK", &[]),
    CallingCodeEntry::from_static("Faroe Islands", 298, "FO", &[]),
    CallingCodeEntry::from_static("Fiji", 679, "FJ", &[]),
    CallingCodeEntry::from_static("Finland", 358, "FI", &[]),
    CallingCodeEntry::from_static("France", 33, "FR", &[]),
    CallingCodeEntry::from_static("French Guiana", 594, "GF", &[]),
    CallingCodeEntry::from_static("French Polynesia", 689, "PF", &[]),
    CallingCodeEntry::from_static("Gabon", 241, "GA", &[]),
    CallingCodeEntry::from_static("Gambia", 220, "GM", &[]),
    CallingCodeEntry::from_static("Georgia", 995, "GE", &[]),
    CallingCodeEntry::from_static("Germany", 49, "DE", &[]),
    CallingCodeEntry::from_static("Ghana", 233, "GH", &[]),
    CallingCodeEntry::from_static("Gibraltar", 350, "GI", &[]),
    CallingCodeEntry::from_static("Greece", 30, "GR", &[]),
    CallingCodeEntry::from_static("Greenland", 299, "GL", &[]),
    CallingCodeEntry::from_static("Grenada", 1, "GD", &[473]),
    CallingCodeEntry::from_static("Guadeloupe", 590, "GP", &[]),
    CallingCodeEntry::from_static("Guam", 1, "GU", &[671]),
    CallingCodeEntry::from_static("Guatemala", 502, "GT", &[]),
    CallingCodeEntry::from_static("Guernsey", 44, "GG", &[1481, 7781, 7839, 7911]),
    CallingCodeEntry::from_static("Guinea", 224, "GN", &[]),
    CallingCodeEntry::from_static("Guinea Bissau", 245, "GW", &[]),
    CallingCodeEntry::from_static("Guyana", 592, "GY", &[]),
    CallingCodeEntry::from_static("Haiti", 509, "HT", &[]),
    CallingCodeEntry::from_static("Honduras", 504, "HN", &[]),
    CallingCodeEntry::from_static("Hong Kong", 852, "HK", &[]),
    CallingCodeEntry::from_static("Hungary", 36, "HU", &[]),
    CallingCodeEntry::from_static("Iceland", 354, "IS", &[]),
    CallingCodeEntry::from_static("India", 91, "IN", &[]),
    CallingCodeEntry::from_static("Indonesia", 62, "ID", &[]),
    CallingCodeEntry::from_static("Iran", 98, "IR", &[]),
    CallingCodeEntry::from_static("Iraq", 964, "IQ", &[]),
    CallingCodeEntry::from_static("Ireland", 353, "IE", &[]),
    CallingCodeEntry::from_static("Isle of Man", 44, "IM", &[1624, 7524, 7624, 7924]),
    CallingCodeEntry::from_static("Israel", 972, "IL", &[]),
    CallingCodeEntry::from_static("Italy", 39, "IT", &[]),
    CallingCodeEntry::from_static("Ivory Coast", 225, "CI", &[]),
    CallingCodeEntry::from_static("Jamaica", 1, "JM", &[658, 876]),
    CallingCodeEntry::from_static("Jan Mayen", 47, "SJ", &[79]),
    CallingCodeEntry::from_static("Japan", 81, "JP", &[]),
    CallingCodeEntry::from_static("Jersey", 44, "JE", &[1534]),
    CallingCodeEntry::from_static("Jordan", 962, "JO", &[]),
    CallingCodeEntry::from_static("Kazakhstan", 7, "KZ", &[6, 7]),
    CallingCodeEntry::from_static("Kenya", 254, "KE", &[]),
    CallingCodeEntry::from_static("Kiribati", 686, "KI", &[]),
    CallingCodeEntry::from_static("Korea North", 850, "KP", &[]),
    CallingCodeEntry::from_static("Korea South", 82, "KR", &[]),
    CallingCodeEntry::from_static("Kosovo", 383, "XK", &[]),
    CallingCodeEntry::from_static("Kuwait", 965, "KW", &[]),
    CallingCodeEntry::from_static("Kyrgyzstan", 996, "KG", &[]),
    CallingCodeEntry::from_static("Laos", 856, "LA", &[]),
    CallingCodeEntry::from_static("Latvia", 371, "LV", &[]),
    CallingCodeEntry::from_static("Lebanon", 961, "LB", &[]),
    CallingCodeEntry::from_static("Lesotho", 266, "LS", &[]),
    CallingCodeEntry::from_static("Liberia", 231, "LR", &[]),
    CallingCodeEntry::from_static("Libya", 218, "LY", &[]),
    CallingCodeEntry::from_static("Liechtenstein", 423, "LI", &[]),
    CallingCodeEntry::from_static("Lithuania", 370, "LT", &[]),
    CallingCodeEntry::from_static("Luxembourg", 352, "LU", &[]),
    CallingCodeEntry::from_static("Macau", 853, "MO", &[]),
    CallingCodeEntry::from_static("Macedonia", 389, "MK", &[]),
    CallingCodeEntry::from_static("Madagascar", 261, "MG", &[]),
    CallingCodeEntry::from_static("Malawi", 265, "MW", &[]),
    CallingCodeEntry::from_static("Malaysia", 60, "MY", &[]),
    CallingCodeEntry::from_static("Maldives", 960, "MV", &[]),
    CallingCodeEntry::from_static("Mali", 223, "ML", &[]),
    CallingCodeEntry::from_static("Malta", 356, "MT", &[]),
    CallingCodeEntry::from_static("Marshall Islands", 692, "MH", &[]),
    CallingCodeEntry::from_static("Martinique", 596, "MQ", &[]),
    CallingCodeEntry::from_static("Mauritania", 222, "MR", &[]),
    CallingCodeEntry::from_static("Mauritius", 230, "MU", &[]),
    CallingCodeEntry::from_static("Mayotte", 262, "YT", &[269, 639]),
    CallingCodeEntry::from_static("Mexico", 52, "MX", &[]),
    CallingCodeEntry::from_static("Micronesia", 691, "FM", &[]),
    CallingCodeEntry::from_static("Moldova", 373, "MD", &[]),
    CallingCodeEntry::from_static("Monaco", 377, "MC", &[]),
    CallingCodeEntry::from_static("Mongolia", 976, "MN", &[]),
    CallingCodeEntry::from_static("Montenegro", 382, "ME", &[]),
    CallingCodeEntry::from_static("Montserrat", 1, "MS", &[664]),
    CallingCodeEntry::from_static("Morocco", 212, "MA", &[]),
    CallingCodeEntry::from_static("Mozambique", 258, "MZ", &[]),
    CallingCodeEntry::from_static("Myanmar", 95, "MM", &[]),
    CallingCodeEntry::from_static("Namibia", 264, "NA", &[]),
    CallingCodeEntry::from_static("Nauru", 674, "NR", &[]),
    CallingCodeEntry::from_static("Nepal", 977, "NP", &[]),
    CallingCodeEntry::from_static("Netherlands", 31, "NL", &[]),
    CallingCodeEntry::from_static("New Caledonia", 687, "NC", &[]),
    CallingCodeEntry::from_static("New Zealand", 64, "NZ", &[]),
    CallingCodeEntry::from_static("Nicaragua", 505, "NI", &[]),
    CallingCodeEntry::from_static("Niger", 227, "NE", &[]),
    CallingCodeEntry::from_static("Nigeria", 234, "NG", &[]),
    CallingCodeEntry::from_static("Niue", 683, "NU", &[]),
    CallingCodeEntry::from_static("Norfolk Island", 672, "NF", &[3]),
    CallingCodeEntry::from_static("Northern Mariana Islands", 1, "MP", &[670]),
    CallingCodeEntry::from_static("Norway", 47, "NO", &[]),
    CallingCodeEntry::from_static("Oman", 968, "OM", &[]),
    CallingCodeEntry::from_static("Pakistan", 92, "PK", &[]),
    CallingCodeEntry::from_static("Palau", 680, "PW", &[]),
    CallingCodeEntry::from_static("Palestine", 970, "PS", &[]),
    CallingCodeEntry::from_static("Panama", 507, "PA", &[]),
    CallingCodeEntry::from_static("Papua New Guinea", 675, "PG", &[]),
    CallingCodeEntry::from_static("Paraguay", 595, "PY", &[]),
    CallingCodeEntry::from_static("Peru", 51, "PE", &[]),
    CallingCodeEntry::from_static("Philippines", 63, "PH", &[]),
    CallingCodeEntry::from_static("Poland", 48, "PL", &[]),
    CallingCodeEntry::from_static("Portugal", 351, "PT", &[]),
    CallingCodeEntry::from_static("Puerto Rico", 1, "PR", &[787, 930]),
    CallingCodeEntry::from_static("Qatar", 974, "QA", &[]),
    CallingCodeEntry::from_static("Reunion", 262, "RE", &[]),
    CallingCodeEntry::from_static("Romania", 40, "RO", &[]),
    CallingCodeEntry::from_static("Russia", 7, "RU", &[]),
    CallingCodeEntry::from_static("Rwanda", 250, "RW", &[]),
    CallingCodeEntry::from_static("Saint Helena", 290, "SH", &[]),
    CallingCodeEntry::from_static("Saint Kitts and Nevis", 1, "KN", &[869]),
    CallingCodeEntry::from_static("Saint Lucia", 1, "LC", &[758]),
    CallingCodeEntry::from_static("Saint Pierre and Miquelon", 508, "PM", &[]),
    CallingCodeEntry::from_static("Saint Vincent and the Grenadines", 1, "VC", &[784]),
    CallingCodeEntry::from_static("Samoa", 685, "WS", &[]),
    CallingCodeEntry::from_static("San Marino", 378, "SM", &[]),
    CallingCodeEntry::from_static("Sao Tome and Principe", 239, "ST", &[]),
    CallingCodeEntry::from_static("Saudi Arabia", 966, "SA", &[]),
    CallingCodeEntry::from_static("Senegal", 221, "SN", &[]),
    CallingCodeEntry::from_static("Serbia", 381, "RS", &[]),
    CallingCodeEntry::from_static("Seychelles", 248, "SC", &[]),
    CallingCodeEntry::from_static("Sierra Leone", 232, "SL", &[]),
    CallingCodeEntry::from_static("Singapore", 65, "SG", &[]),
    CallingCodeEntry::from_static("Slovakia", 421, "SK", &[]),
    CallingCodeEntry::from_static("Slovenia", 386, "SI", &[]),
    CallingCodeEntry::from_static("Solomon Islands", 677, "SB", &[]),
    CallingCodeEntry::from_static("Somalia", 252, "SO", &[]),
    CallingCodeEntry::from_static("South Africa", 27, "ZA", &[]),
    CallingCodeEntry::from_static("South Sudan", 211, "SS", &[]),
    CallingCodeEntry::from_static("Spain", 34, "ES", &[]),
    CallingCodeEntry::from_static("Sri Lanka", 94, "LK", &[]),
    CallingCodeEntry::from_static("Sudan", 249, "SD", &[]),
    CallingCodeEntry::from_static("Suriname", 597, "SR", &[]),
    CallingCodeEntry::from_static("Svalbard and Jan Mayen", 47, "SJ", &[]),
    CallingCodeEntry::from_static("Swaziland", 268, "SZ", &[]),
    CallingCodeEntry::from_static("Sweden", 46, "SE", &[]),
    CallingCodeEntry::from_static("Switzerland", 41, "CH", &[]),
    CallingCodeEntry::from_static("Syria", 963, "SY", &[]),
    CallingCodeEntry::from_static("Taiwan", 886, "TW", &[]),
    CallingCodeEntry::from_static("Tajikistan", 992, "TJ", &[]),
    CallingCodeEntry::from_static("Tanzania", 255, "TZ", &[]),
    CallingCodeEntry::from_static("Thailand", 66, "TH", &[]),
    CallingCodeEntry::from_static("Togo", 228, "TG", &[]),
    CallingCodeEntry::from_static("Tokelau", 690, "TK", &[]),
    CallingCodeEntry::from_static("Tonga", 676, "TO", &[]),
    CallingCodeEntry::from_static("Trinidad and Tobago", 1, "TT", &[868]),
    CallingCodeEntry::from_static("Tunisia", 216, "TN", &[]),
    CallingCodeEntry::from_static("Turkey", 90, "TR", &[]),
    CallingCodeEntry::from_static("Turkmenistan", 993, "TM", &[]),
    CallingCodeEntry::from_static("Turks and Caicos Islands", 1, "TC", &[649]),
    CallingCodeEntry::from_static("Tuvalu", 688, "TV", &[]),
    CallingCodeEntry::from_static("Uganda", 256, "UG", &[]),
    CallingCodeEntry::from_static("Ukraine", 380, "UA", &[]),
    CallingCodeEntry::from_static("United Arab Emirates", 971, "AE", &[]),
    CallingCodeEntry::from_static("United Kingdom", 44, "GB", &[]),
    CallingCodeEntry::from_static("United States", 1, "US", &[]),
    CallingCodeEntry::from_static("Uruguay", 598, "UY", &[]),
    CallingCodeEntry::from_static("Uzbekistan", 998, "UZ", &[]),
    CallingCodeEntry::from_static("Vanuatu", 678, "VU", &[]),
    CallingCodeEntry::from_static("Vatican City", 379, "VA", &[]),
    CallingCodeEntry::from_static("Venezuela", 58, "VE", &[]),
    CallingCodeEntry::from_static("Vietnam", 84, "VN", &[]),
    CallingCodeEntry::from_static("Virgin Islands", 1, "VI", &[340]),
    CallingCodeEntry::from_static("Wallis and Futuna", 681, "WF", &[]),
    CallingCodeEntry::from_static("Western Sahara", 212, "EH", &[]),
    CallingCodeEntry::from_static("Yemen", 967, "YE", &[]),
    CallingCodeEntry::from_static("Zambia", 260, "ZM", &[]),
    CallingCodeEntry::from_static("Zanzibar", 255, "TZ", &[]),
    CallingCodeEntry::from_static("Zimbabwe", 263, "ZW", &[]),
];
